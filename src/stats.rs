//! Per-course aggregate statistics
//!
//! All means go through [`mean`], which returns 0.0 for an empty input
//! instead of dividing by zero.

use serde::{Deserialize, Serialize};

use crate::record::StudentRecord;

/// Arithmetic mean, or 0.0 for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Aggregate view of one course across the whole roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseStatistics {
    /// Course name
    pub course: String,
    /// Number of students with a score in the course
    pub enrolled_students: usize,
    /// Mean score
    pub average_grade: f64,
    /// Highest score
    pub highest_grade: f64,
    /// Lowest score
    pub lowest_grade: f64,
    /// Percentage of scores at or above the passing threshold
    pub passing_rate: f64,
    /// Mean attendance over students with attendance recorded (0.0 if none)
    pub average_attendance: f64,
}

impl CourseStatistics {
    /// Scan `records` and aggregate everything recorded under `course`.
    ///
    /// Returns `None` when no record has a score for the course.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compute<'a, I>(course: &str, records: I, passing_threshold: f64) -> Option<Self>
    where
        I: IntoIterator<Item = &'a StudentRecord>,
    {
        let mut grades = Vec::new();
        let mut attendance = Vec::new();

        for record in records {
            if let Some(score) = record.score(course) {
                grades.push(score);
            }
            if let Some(rate) = record.attendance_for(course) {
                attendance.push(rate);
            }
        }

        if grades.is_empty() {
            return None;
        }

        let highest_grade = grades.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lowest_grade = grades.iter().copied().fold(f64::INFINITY, f64::min);
        let passing = grades.iter().filter(|&&g| g >= passing_threshold).count();

        Some(Self {
            course: course.to_string(),
            enrolled_students: grades.len(),
            average_grade: mean(&grades),
            highest_grade,
            lowest_grade,
            passing_rate: passing as f64 / grades.len() as f64 * 100.0,
            average_attendance: mean(&attendance),
        })
    }
}
