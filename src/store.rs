//! Record Store - in-memory roster of student records
//!
//! Records are kept in an ordered map keyed by student ID, so every scan
//! (search, statistics, export) visits students in ascending ID order.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::record::StudentRecord;
use crate::report::Report;
use crate::stats::{mean, CourseStatistics};
use crate::topk::{select_top_k, Candidate, RankedStudent};
use crate::{Error, Result};

/// In-memory store for student records.
///
/// ## Design
///
/// The store owns every record exclusively. Course names observed through
/// scores are tracked in a set that only ever grows: removing the last
/// student enrolled in a course does not forget the course.
///
/// ```rust
/// use roster_db::{RecordStore, StudentRecord};
///
/// let mut store = RecordStore::new();
/// store.insert(
///     StudentRecord::builder(1, "Alice Johnson", 20, "alice.j@email.com")
///         .score("Databases", 91.0)
///         .build()?,
/// );
///
/// assert_eq!(store.search_by_name("alice").len(), 1);
/// assert_eq!(store.top_by_metric(1)[0].id, 1);
/// # Ok::<(), roster_db::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    students: BTreeMap<u32, StudentRecord>,
    courses: BTreeSet<String>,
    config: StoreConfig,
}

impl RecordStore {
    /// Create a new empty store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `config` fails
    /// [`StoreConfig::validate`].
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check if the store holds no students.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Check whether a student ID is present.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.students.contains_key(&id)
    }

    /// Every course ever observed, in lexicographic order.
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(String::as_str)
    }

    /// Number of distinct courses ever observed.
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// All students in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.students.values()
    }

    /// Add a student, replacing any existing student with the same ID.
    ///
    /// The student's score courses join the known course set. Returns the
    /// replaced record, if there was one.
    pub fn insert(&mut self, student: StudentRecord) -> Option<StudentRecord> {
        self.courses.extend(student.scores().keys().cloned());
        let id = student.id();
        let previous = self.students.insert(id, student);
        if previous.is_some() {
            debug!(student_id = id, "replaced student record");
        } else {
            debug!(student_id = id, "inserted student record");
        }
        previous
    }

    /// Remove a student. Returns whether a record was deleted.
    pub fn remove(&mut self, id: u32) -> bool {
        let removed = self.students.remove(&id).is_some();
        if removed {
            debug!(student_id = id, "removed student record");
        }
        removed
    }

    /// Get a student by ID.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&StudentRecord> {
        self.students.get(&id)
    }

    /// Record a score for an existing student.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StudentNotFound`] for an unknown ID, or
    /// [`Error::ValueOutOfRange`] if the score is outside 0..=100 (the
    /// previous score is kept).
    pub fn set_score(&mut self, id: u32, course: &str, score: f64) -> Result<()> {
        let student = self
            .students
            .get_mut(&id)
            .ok_or(Error::StudentNotFound(id))?;
        if let Err(err) = student.add_score(course, score) {
            warn!(student_id = id, course, %err, "rejected score write");
            return Err(err);
        }
        self.courses.insert(course.to_string());
        Ok(())
    }

    /// Record an attendance percentage for an existing student.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StudentNotFound`] for an unknown ID, or
    /// [`Error::ValueOutOfRange`] if the percentage is outside 0..=100.
    pub fn set_attendance(&mut self, id: u32, course: &str, percentage: f64) -> Result<()> {
        let student = self
            .students
            .get_mut(&id)
            .ok_or(Error::StudentNotFound(id))?;
        if let Err(err) = student.add_attendance(course, percentage) {
            warn!(student_id = id, course, %err, "rejected attendance write");
            return Err(err);
        }
        Ok(())
    }

    /// Case-insensitive substring search on student names.
    ///
    /// Results are in ascending ID order. An empty needle matches everyone.
    #[must_use]
    pub fn search_by_name(&self, needle: &str) -> Vec<&StudentRecord> {
        let needle = needle.to_lowercase();
        self.students
            .values()
            .filter(|student| student.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Students with a score in `course`, in ascending ID order.
    #[must_use]
    pub fn students_by_course(&self, course: &str) -> Vec<&StudentRecord> {
        self.students
            .values()
            .filter(|student| student.score(course).is_some())
            .collect()
    }

    /// Best `n` students by GPA.
    ///
    /// Only students with at least one score are ranked. Order is
    /// descending GPA, ties broken by ascending ID.
    #[must_use]
    pub fn top_by_metric(&self, n: usize) -> Vec<RankedStudent> {
        let scale = &self.config.grade_scale;
        let candidates: Vec<Candidate> = self
            .students
            .values()
            .filter(|student| !student.scores().is_empty())
            .map(|student| Candidate {
                id: student.id(),
                metric: student.gpa_with(scale),
            })
            .collect();

        select_top_k(candidates, n)
            .into_iter()
            .filter_map(|candidate| {
                self.students.get(&candidate.id).map(|student| RankedStudent {
                    id: candidate.id,
                    name: student.name().to_string(),
                    gpa: candidate.metric,
                    average_grade: student.average_grade(),
                })
            })
            .collect()
    }

    /// Aggregate statistics for one course.
    ///
    /// Returns `None` when no current student has a score in the course.
    #[must_use]
    pub fn category_statistics(&self, course: &str) -> Option<CourseStatistics> {
        CourseStatistics::compute(
            course,
            self.students.values(),
            self.config.passing_threshold,
        )
    }

    /// Mean GPA over every student (students without scores count as 0.0).
    #[must_use]
    pub fn average_gpa(&self) -> f64 {
        let scale = &self.config.grade_scale;
        let gpas: Vec<f64> = self.students.values().map(|s| s.gpa_with(scale)).collect();
        mean(&gpas)
    }

    /// Mean of every student's average grade.
    #[must_use]
    pub fn average_grade(&self) -> f64 {
        let grades: Vec<f64> = self
            .students
            .values()
            .map(StudentRecord::average_grade)
            .collect();
        mean(&grades)
    }

    /// Build a full read-only report of the store.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::build(self)
    }
}
