//! Roster report - read-only aggregation over a whole store
//!
//! [`Report`] is plain data; its `Display` impl renders the classic
//! 70-column text layout.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stats::CourseStatistics;
use crate::store::RecordStore;
use crate::topk::RankedStudent;

const REPORT_WIDTH: usize = 70;

/// Snapshot of roster-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// When the report was built
    pub generated_at: DateTime<Utc>,
    /// Number of students
    pub total_students: usize,
    /// Number of distinct courses ever observed
    pub total_courses: usize,
    /// Mean GPA over all students (0.0 for an empty store)
    pub average_gpa: f64,
    /// Mean of per-student average grades (0.0 for an empty store)
    pub average_grade: f64,
    /// Configured ranking size
    pub top_n: usize,
    /// Highest-ranked students by GPA (at most `top_n`)
    pub top_students: Vec<RankedStudent>,
    /// Statistics for each course with current enrollees, by course name
    pub course_statistics: Vec<CourseStatistics>,
}

impl Report {
    /// Aggregate `store` into a report stamped with the current time.
    #[must_use]
    pub fn build(store: &RecordStore) -> Self {
        Self::build_at(store, Utc::now())
    }

    /// Aggregate `store` into a report with an explicit timestamp.
    #[must_use]
    pub fn build_at(store: &RecordStore, generated_at: DateTime<Utc>) -> Self {
        let course_statistics = store
            .courses()
            .filter_map(|course| store.category_statistics(course))
            .collect();

        Self {
            generated_at,
            total_students: store.len(),
            total_courses: store.course_count(),
            average_gpa: store.average_gpa(),
            average_grade: store.average_grade(),
            top_n: store.config().report_top_n,
            top_students: store.top_by_metric(store.config().report_top_n),
            course_statistics,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(REPORT_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "{:^REPORT_WIDTH$}", "STUDENT MANAGEMENT SYSTEM REPORT")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Total Students: {}", self.total_students)?;
        writeln!(f, "Total Courses: {}", self.total_courses)?;
        writeln!(f, "{rule}")?;

        if self.total_students > 0 {
            writeln!(f)?;
            writeln!(f, "OVERALL STATISTICS:")?;
            writeln!(f, "  Average GPA:   {:.2}", self.average_gpa)?;
            writeln!(f, "  Average Grade: {:.2}", self.average_grade)?;
        }

        writeln!(f)?;
        writeln!(f, "TOP {} STUDENTS BY GPA:", self.top_n)?;
        for (rank, student) in self.top_students.iter().enumerate() {
            writeln!(
                f,
                "  {}. {:<20} - GPA: {:.2} - Avg: {:.2}",
                rank + 1,
                student.name,
                student.gpa,
                student.average_grade
            )?;
        }

        writeln!(f)?;
        writeln!(f, "COURSE STATISTICS:")?;
        for stats in &self.course_statistics {
            writeln!(f)?;
            writeln!(f, "  {}:", stats.course)?;
            writeln!(f, "    Enrolled: {}", stats.enrolled_students)?;
            writeln!(f, "    Average:  {:.2}", stats.average_grade)?;
            writeln!(
                f,
                "    Range:    {:.0} - {:.0}",
                stats.lowest_grade, stats.highest_grade
            )?;
            writeln!(f, "    Passing:  {:.1}%", stats.passing_rate)?;
            writeln!(f, "    Attend:   {:.1}%", stats.average_attendance)?;
        }

        writeln!(f)?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StudentRecord;
    use chrono::TimeZone;

    #[test]
    fn test_empty_report() {
        let report = RecordStore::new().report();
        assert_eq!(report.total_students, 0);
        assert_eq!(report.total_courses, 0);
        assert!(report.average_gpa.abs() < f64::EPSILON);
        assert!(report.average_grade.abs() < f64::EPSILON);
        assert!(report.top_students.is_empty());
        assert!(report.course_statistics.is_empty());
    }

    #[test]
    fn test_report_skips_courses_without_enrollees() {
        let mut store = RecordStore::new();
        store.insert(
            StudentRecord::builder(1, "A", 20, "a@x")
                .score("Zoology", 80.0)
                .build()
                .unwrap(),
        );
        store.insert(
            StudentRecord::builder(2, "B", 20, "b@x")
                .score("Algebra", 70.0)
                .build()
                .unwrap(),
        );
        store.remove(1);

        let report = store.report();
        assert_eq!(report.total_courses, 2);
        assert_eq!(report.course_statistics.len(), 1);
        assert_eq!(report.course_statistics[0].course, "Algebra");
    }

    #[test]
    fn test_render_layout() {
        let mut store = RecordStore::new();
        store.insert(
            StudentRecord::builder(1, "Alice Johnson", 20, "a@x")
                .score("Databases", 95.0)
                .attendance("Databases", 88.0)
                .build()
                .unwrap(),
        );
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let text = Report::build_at(&store, at).to_string();

        assert!(text.starts_with(&"=".repeat(70)));
        assert!(text.contains("Generated: 2024-03-01 12:30:00"));
        assert!(text.contains("Total Students: 1"));
        assert!(text.contains("Average GPA:   4.00"));
        assert!(text.contains("1. Alice Johnson        - GPA: 4.00 - Avg: 95.00"));
        assert!(text.contains("  Databases:"));
        assert!(text.contains("Range:    95 - 95"));
        assert!(text.contains("Passing:  100.0%"));
        assert!(text.contains("Attend:   88.0%"));
    }

    #[test]
    fn test_render_header_uses_configured_top_n() {
        let mut store = RecordStore::new();
        for id in 1..=3 {
            store.insert(
                StudentRecord::builder(id, format!("S{id}"), 20, "s@x")
                    .score("Art", 75.0)
                    .build()
                    .unwrap(),
            );
        }
        let report = store.report();
        let text = report.to_string();

        assert_eq!(report.top_n, 5);
        assert_eq!(report.top_students.len(), 3);
        assert!(text.contains("TOP 5 STUDENTS BY GPA:"));
    }

    #[test]
    fn test_render_empty_omits_overall_section() {
        let text = RecordStore::new().report().to_string();
        assert!(text.contains("Total Students: 0"));
        assert!(!text.contains("OVERALL STATISTICS"));
    }
}
