//! Deterministic sample roster for demos, benchmarks and tests

use crate::config::StoreConfig;
use crate::record::StudentRecord;
use crate::store::RecordStore;
use crate::Result;

/// Courses in the sample roster.
pub const SAMPLE_COURSES: [&str; 4] = [
    "Python Programming",
    "Data Structures",
    "Web Development",
    "Database Systems",
];

const SAMPLE_STUDENTS: [(u32, &str, u32, &str); 8] = [
    (1001, "Alice Johnson", 20, "alice.j@email.com"),
    (1002, "Bob Smith", 21, "bob.smith@email.com"),
    (1003, "Charlie Brown", 19, "charlie.b@email.com"),
    (1004, "Diana Prince", 22, "diana.p@email.com"),
    (1005, "Eve Davis", 20, "eve.d@email.com"),
    (1006, "Frank Miller", 21, "frank.m@email.com"),
    (1007, "Grace Lee", 19, "grace.l@email.com"),
    (1008, "Henry Wilson", 22, "henry.w@email.com"),
];

/// Score and attendance for a student in the course at `course_index`.
///
/// Scores spread by course around a per-student base; attendance is
/// floored at 60.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_values(student_id: u32, course_index: u32) -> (f64, f64) {
    let base = 60 + i64::from(student_id % 30);
    let index = i64::from(course_index);
    let score = (base + index * 5 - 10).clamp(0, 100);
    let attendance = (base + index * 3).clamp(60, 100);
    (score as f64, attendance as f64)
}

/// Build the 8-student, 4-course sample roster.
///
/// # Errors
///
/// Only fails if a generated value falls outside 0..=100, which the
/// clamping rules out.
pub fn roster() -> Result<RecordStore> {
    roster_with_config(StoreConfig::default())
}

/// Build the sample roster into a store using `config`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
/// `config` fails validation.
pub fn roster_with_config(config: StoreConfig) -> Result<RecordStore> {
    let mut store = RecordStore::with_config(config)?;
    for (id, name, age, email) in SAMPLE_STUDENTS {
        let mut builder = StudentRecord::builder(id, name, age, email);
        for (index, course) in (0u32..).zip(SAMPLE_COURSES) {
            let (score, attendance) = sample_values(id, index);
            builder = builder.score(course, score).attendance(course, attendance);
        }
        store.insert(builder.build()?);
    }
    Ok(store)
}
