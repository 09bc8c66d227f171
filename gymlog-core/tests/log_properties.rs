//! Property tests for the workout log.
//!
//! - Listing count and order over arbitrary sequences of valid adds
//! - Earlier lines never change
//! - Rejected input never reaches the log

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use gymlog::{EMPTY_LOG_MESSAGE, Field, ValidationError, WorkoutEntry, WorkoutLog};
use proptest::prelude::*;
use std::cell::Cell;

fn arb_entry() -> impl Strategy<Value = WorkoutEntry> {
    (
        "[A-Za-z][A-Za-z ]{0,15}",
        1u32..20,
        1u32..50,
        0.0f64..500.0,
    )
        .prop_map(|(name, sets, reps, weight)| {
            WorkoutEntry::new(&name, sets, reps, weight).unwrap()
        })
}

fn stepping_clock() -> impl Fn() -> NaiveDateTime {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(6, 30, 0)
        .unwrap();
    let step = Cell::new(0);
    move || {
        let n = step.get();
        step.set(n + 1);
        start + TimeDelta::seconds(n)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: N adds produce N lines, newest first
    #[test]
    fn prop_list_is_reverse_of_insertion(entries in proptest::collection::vec(arb_entry(), 1..40)) {
        let mut log = WorkoutLog::with_clock(stepping_clock());
        let mut expected = Vec::new();
        for entry in entries.iter().cloned() {
            expected.push(log.add(entry).to_string());
        }
        expected.reverse();

        let lines = log.list();
        prop_assert_eq!(lines.len(), entries.len());
        prop_assert_eq!(lines, expected);
    }

    /// Property: later adds leave earlier lines untouched
    #[test]
    fn prop_earlier_lines_are_stable(
        first in proptest::collection::vec(arb_entry(), 1..20),
        more in proptest::collection::vec(arb_entry(), 0..20),
    ) {
        let mut log = WorkoutLog::with_clock(stepping_clock());
        for entry in first {
            log.add(entry);
        }
        let before = log.list();
        for entry in more.iter().cloned() {
            log.add(entry);
        }
        let after = log.list();

        prop_assert_eq!(&after[more.len()..], &before[..]);
    }

    /// Property: list() without an intervening add is idempotent
    #[test]
    fn prop_list_is_idempotent(entries in proptest::collection::vec(arb_entry(), 0..20)) {
        let mut log = WorkoutLog::with_clock(stepping_clock());
        for entry in entries {
            log.add(entry);
        }
        prop_assert_eq!(log.list(), log.list());
    }

    /// Property: a negative weight typed among valid adds leaves the log as it was
    #[test]
    fn prop_negative_weight_never_logged(
        entries in proptest::collection::vec(arb_entry(), 0..10),
        weight in -1000.0f64..-0.001,
    ) {
        let mut log = WorkoutLog::with_clock(stepping_clock());
        for entry in entries.iter().cloned() {
            log.add(entry);
        }
        let before = log.list();

        let result = WorkoutEntry::parse("Squat", "3", "5", &weight.to_string());
        prop_assert_eq!(&result, &Err(ValidationError::Range(Field::Weight)));
        if let Ok(entry) = result {
            log.add(entry);
        }

        prop_assert_eq!(log.len(), entries.len());
        prop_assert_eq!(log.list(), before);
        if entries.is_empty() {
            prop_assert_eq!(log.list(), vec![EMPTY_LOG_MESSAGE.to_string()]);
        }
    }

    /// Property: non-positive counts typed as text are range errors
    #[test]
    fn prop_non_positive_sets_rejected(sets in -10_000i32..=0) {
        let result = WorkoutEntry::parse("Squat", &sets.to_string(), "5", "100");
        prop_assert_eq!(result, Err(ValidationError::Range(Field::Sets)));
    }
}

#[test]
fn bench_then_squat_example() {
    let mut log = WorkoutLog::new();
    log.add(WorkoutEntry::new("Bench Press", 3, 10, 80.0).unwrap());
    log.add(WorkoutEntry::new("Squat", 4, 8, 100.0).unwrap());

    let lines = log.list();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Exercise: Squat, Sets: 4, Reps: 8, Weight: 100.00, Date: "));
    assert!(
        lines[1].starts_with("Exercise: Bench Press, Sets: 3, Reps: 10, Weight: 80.00, Date: ")
    );
}
