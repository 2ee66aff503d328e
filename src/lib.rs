//! # Roster-DB: Embedded Student Record Store
//!
//! **Version**: 0.1.0
//!
//! Roster-DB keeps student records in memory and answers the questions a
//! registrar asks of them: who is this student, who matches a name, who
//! ranks highest by GPA, and how is each course doing.
//!
//! ## Design Principles
//!
//! - **Poka-Yoke safety**: out-of-range scores are rejected at write time,
//!   never clamped
//! - **No surprises**: every mean over an empty set is 0.0, never a panic
//! - **Determinism**: ordered maps everywhere; ranking ties go to the lower ID
//!
//! ## Example Usage
//!
//! ```rust
//! use roster_db::{RecordStore, StudentRecord};
//!
//! let mut store = RecordStore::new();
//! store.insert(
//!     StudentRecord::builder(1, "Ada", 21, "ada@example.edu")
//!         .score("Compilers", 95.0)
//!         .attendance("Compilers", 98.0)
//!         .build()?,
//! );
//! store.insert(
//!     StudentRecord::builder(2, "Grace", 22, "grace@example.edu")
//!         .score("Compilers", 85.0)
//!         .build()?,
//! );
//!
//! let stats = store.category_statistics("Compilers").expect("course has enrollees");
//! assert_eq!(stats.enrolled_students, 2);
//! assert!((stats.average_grade - 90.0).abs() < f64::EPSILON);
//!
//! println!("{}", store.report());
//! # Ok::<(), roster_db::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod export;
pub mod record;
pub mod report;
pub mod sample;
pub mod stats;
pub mod store;
pub mod topk;

pub use config::{GradeBand, GradeScale, StoreConfig};
pub use error::{Error, Result, ValueKind};
pub use record::{StudentRecord, StudentRecordBuilder};
pub use report::Report;
pub use stats::CourseStatistics;
pub use store::RecordStore;
pub use topk::RankedStudent;
