//! JSON export of the roster

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::StudentRecord;
use crate::store::RecordStore;
use crate::Result;

/// Flattened view of a student with derived metrics rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    /// Student ID
    pub student_id: u32,
    /// Student name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Contact email
    pub email: String,
    /// Scores by course
    pub courses: BTreeMap<String, f64>,
    /// Attendance by course
    pub attendance: BTreeMap<String, f64>,
    /// GPA
    pub gpa: f64,
    /// Mean score
    pub avg_grade: f64,
    /// Mean attendance
    pub avg_attendance: f64,
}

impl StudentSummary {
    /// Summarize a record using the store's grade scale.
    #[must_use]
    pub fn from_record(record: &StudentRecord, store: &RecordStore) -> Self {
        Self {
            student_id: record.id(),
            name: record.name().to_string(),
            age: record.age(),
            email: record.email().to_string(),
            courses: record.scores().clone(),
            attendance: record.attendance().clone(),
            gpa: round2(record.gpa_with(&store.config().grade_scale)),
            avg_grade: round2(record.average_grade()),
            avg_attendance: round2(record.average_attendance()),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summaries for every student, keyed by ID.
#[must_use]
pub fn summaries(store: &RecordStore) -> BTreeMap<u32, StudentSummary> {
    store
        .iter()
        .map(|record| (record.id(), StudentSummary::from_record(record, store)))
        .collect()
}

/// Pretty-printed JSON object of every student keyed by ID.
///
/// # Errors
///
/// Returns [`Error::Serialization`](crate::Error::Serialization) if encoding fails.
pub fn to_json(store: &RecordStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(&summaries(store))?)
}
