//! Property-based tests for roster-db
//!
//! - Test ranking and aggregation invariants over random rosters
//! - Run with ProptestConfig::with_cases(100)

use proptest::prelude::*;
use roster_db::{RecordStore, StudentRecord};

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

const COURSES: [&str; 3] = ["Art", "Biology", "Chemistry"];

/// Generate a student with a random subset of course scores
fn arb_student(id: u32) -> impl Strategy<Value = StudentRecord> {
    proptest::collection::vec(proptest::option::of(0.0f64..=100.0), COURSES.len()).prop_map(
        move |scores| {
            let mut record = StudentRecord::new(id, format!("Student {id}"), 20, "s@x");
            for (course, score) in COURSES.iter().zip(scores) {
                if let Some(score) = score {
                    record.add_score(*course, score).unwrap();
                }
            }
            record
        },
    )
}

/// Generate a store with up to `max` students (IDs 0..n)
fn arb_store(max: usize) -> impl Strategy<Value = RecordStore> {
    (0..=max).prop_flat_map(|n| {
        let students: Vec<_> = (0..n)
            .map(|id| arb_student(u32::try_from(id).unwrap()))
            .collect();
        students.prop_map(|students| {
            let mut store = RecordStore::new();
            for student in students {
                store.insert(student);
            }
            store
        })
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: ranking length is min(n, scored students)
    #[test]
    fn prop_top_length(store in arb_store(30), n in 0usize..40) {
        let scored = store.iter().filter(|s| !s.scores().is_empty()).count();
        prop_assert_eq!(store.top_by_metric(n).len(), n.min(scored));
    }

    /// Property: ranking is descending GPA, ascending ID on ties
    #[test]
    fn prop_top_ordering(store in arb_store(30), n in 0usize..40) {
        let top = store.top_by_metric(n);
        for pair in top.windows(2) {
            prop_assert!(pair[0].gpa >= pair[1].gpa);
            if pair[0].gpa.total_cmp(&pair[1].gpa).is_eq() {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// Property: a shorter ranking is a prefix of a longer one
    #[test]
    fn prop_top_prefix(store in arb_store(30), k in 0usize..30) {
        let full = store.top_by_metric(usize::MAX);
        let partial = store.top_by_metric(k);
        prop_assert_eq!(&full[..partial.len()], &partial[..]);
    }

    /// Property: out-of-range writes never change the stored value
    #[test]
    fn prop_out_of_range_rejected(
        initial in 0.0f64..=100.0,
        bad in prop_oneof![-1.0e6f64..-0.001, 100.001f64..1.0e6],
    ) {
        let mut record = StudentRecord::new(1, "A", 20, "a@x");
        record.add_score("Art", initial).unwrap();
        prop_assert!(record.add_score("Art", bad).is_err());
        prop_assert_eq!(record.score("Art"), Some(initial));
    }

    /// Property: course statistics stay within bounds
    #[test]
    fn prop_course_statistics_bounds(store in arb_store(30)) {
        for course in COURSES {
            let enrolled = store.students_by_course(course).len();
            match store.category_statistics(course) {
                None => prop_assert_eq!(enrolled, 0),
                Some(stats) => {
                    prop_assert_eq!(stats.enrolled_students, enrolled);
                    prop_assert!(stats.lowest_grade <= stats.average_grade + 1e-9);
                    prop_assert!(stats.average_grade <= stats.highest_grade + 1e-9);
                    prop_assert!((0.0..=100.0).contains(&stats.passing_rate));
                }
            }
        }
    }

    /// Property: report never panics and averages stay in range
    #[test]
    fn prop_report_averages_in_range(store in arb_store(30)) {
        let report = store.report();
        prop_assert_eq!(report.total_students, store.len());
        prop_assert!((0.0..=4.0).contains(&report.average_gpa));
        prop_assert!((0.0..=100.0).contains(&report.average_grade));
    }

    /// Property: removing students never shrinks the course set
    #[test]
    fn prop_remove_keeps_courses(mut store in arb_store(20)) {
        let before = store.course_count();
        let ids: Vec<u32> = store.iter().map(StudentRecord::id).collect();
        for id in ids {
            prop_assert!(store.remove(id));
        }
        prop_assert!(store.is_empty());
        prop_assert_eq!(store.course_count(), before);
    }
}
