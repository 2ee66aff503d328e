//! Student Record - one managed entity in the roster

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GradeScale;
use crate::error::ValueKind;
use crate::stats::mean;
use crate::{Error, Result};

/// Inclusive bounds for every score and attendance value.
pub const VALUE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Student Record represents one student and their per-course results.
///
/// Scores and attendance are keyed by course name. Every stored value lies
/// in [`VALUE_RANGE`]; writes outside it are rejected and the previous value
/// is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawStudentRecord")]
pub struct StudentRecord {
    id: u32,
    name: String,
    age: u32,
    email: String,
    scores: BTreeMap<String, f64>,
    attendance: BTreeMap<String, f64>,
}

impl StudentRecord {
    /// Create a new student record with no scores or attendance.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique student ID
    /// * `name` - Display name
    /// * `age` - Age in years
    /// * `email` - Contact address
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            email: email.into(),
            scores: BTreeMap::new(),
            attendance: BTreeMap::new(),
        }
    }

    /// Create a builder for constructing a record with scores and attendance.
    #[must_use]
    pub fn builder(
        id: u32,
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
    ) -> StudentRecordBuilder {
        StudentRecordBuilder::new(id, name, age, email)
    }

    /// Get the student ID.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Get the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the student age.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Get the contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Scores by course name.
    #[must_use]
    pub const fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }

    /// Attendance percentages by course name.
    #[must_use]
    pub const fn attendance(&self) -> &BTreeMap<String, f64> {
        &self.attendance
    }

    /// Score for a single course, if recorded.
    #[must_use]
    pub fn score(&self, course: &str) -> Option<f64> {
        self.scores.get(course).copied()
    }

    /// Attendance for a single course, if recorded.
    #[must_use]
    pub fn attendance_for(&self, course: &str) -> Option<f64> {
        self.attendance.get(course).copied()
    }

    /// Add or update the score for a course.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `score` is outside 0..=100.
    /// The previous score, if any, is left unchanged.
    pub fn add_score(&mut self, course: impl Into<String>, score: f64) -> Result<()> {
        let course = course.into();
        check_range(ValueKind::Score, &course, score)?;
        self.scores.insert(course, score);
        Ok(())
    }

    /// Add or update the attendance percentage for a course.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `percentage` is outside 0..=100.
    pub fn add_attendance(&mut self, course: impl Into<String>, percentage: f64) -> Result<()> {
        let course = course.into();
        check_range(ValueKind::Attendance, &course, percentage)?;
        self.attendance.insert(course, percentage);
        Ok(())
    }

    /// GPA on the default 4.0 scale. 0.0 when no scores are recorded.
    #[must_use]
    pub fn gpa(&self) -> f64 {
        self.gpa_with(&GradeScale::default())
    }

    /// GPA using a custom grade scale. 0.0 when no scores are recorded.
    #[must_use]
    pub fn gpa_with(&self, scale: &GradeScale) -> f64 {
        let points: Vec<f64> = self.scores.values().map(|&s| scale.points(s)).collect();
        mean(&points)
    }

    /// Mean raw score across all courses. 0.0 when no scores are recorded.
    #[must_use]
    pub fn average_grade(&self) -> f64 {
        let scores: Vec<f64> = self.scores.values().copied().collect();
        mean(&scores)
    }

    /// Mean attendance across all courses. 0.0 when none is recorded.
    #[must_use]
    pub fn average_attendance(&self) -> f64 {
        let attendance: Vec<f64> = self.attendance.values().copied().collect();
        mean(&attendance)
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student({}, {}, GPA: {:.2})", self.id, self.name, self.gpa())
    }
}

// Wire shape of `StudentRecord`; values are re-checked on the way in
#[derive(Deserialize)]
struct RawStudentRecord {
    id: u32,
    name: String,
    age: u32,
    email: String,
    #[serde(default)]
    scores: BTreeMap<String, f64>,
    #[serde(default)]
    attendance: BTreeMap<String, f64>,
}

impl TryFrom<RawStudentRecord> for StudentRecord {
    type Error = Error;

    fn try_from(raw: RawStudentRecord) -> Result<Self> {
        let mut record = Self::new(raw.id, raw.name, raw.age, raw.email);
        for (course, score) in raw.scores {
            record.add_score(course, score)?;
        }
        for (course, percentage) in raw.attendance {
            record.add_attendance(course, percentage)?;
        }
        Ok(record)
    }
}

fn check_range(field: ValueKind, course: &str, value: f64) -> Result<()> {
    if VALUE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(Error::ValueOutOfRange {
            field,
            course: course.to_string(),
            value,
        })
    }
}

/// Builder for `StudentRecord`.
#[derive(Debug)]
pub struct StudentRecordBuilder {
    record: StudentRecord,
    scores: Vec<(String, f64)>,
    attendance: Vec<(String, f64)>,
}

impl StudentRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            record: StudentRecord::new(id, name, age, email),
            scores: Vec::new(),
            attendance: Vec::new(),
        }
    }

    /// Record a course score.
    #[must_use]
    pub fn score(mut self, course: impl Into<String>, score: f64) -> Self {
        self.scores.push((course.into(), score));
        self
    }

    /// Record a course attendance percentage.
    #[must_use]
    pub fn attendance(mut self, course: impl Into<String>, percentage: f64) -> Self {
        self.attendance.push((course.into(), percentage));
        self
    }

    /// Build the `StudentRecord`.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::ValueOutOfRange`] among the queued values;
    /// no record is produced in that case.
    pub fn build(self) -> Result<StudentRecord> {
        let mut record = self.record;
        for (course, score) in self.scores {
            record.add_score(course, score)?;
        }
        for (course, percentage) in self.attendance {
            record.add_attendance(course, percentage)?;
        }
        Ok(record)
    }
}
