use chrono::NaiveDateTime;
use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::errors::{Field, ValidationError};
use crate::input;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Validated fields of a workout that has not been logged yet.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    name: String,
    sets: u32,
    reps: u32,
    weight: f64,
}

impl WorkoutEntry {
    pub fn new(name: &str, sets: u32, reps: u32, weight: f64) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField(Field::Name));
        }
        if sets == 0 {
            return Err(ValidationError::Range(Field::Sets));
        }
        if reps == 0 {
            return Err(ValidationError::Range(Field::Reps));
        }
        if !weight.is_finite() {
            return Err(ValidationError::Format(Field::Weight));
        }
        if weight < 0.0 {
            return Err(ValidationError::Range(Field::Weight));
        }

        Ok(Self {
            name: name.to_string(),
            sets,
            reps,
            // -0.0 would otherwise print as "-0.00"
            weight: if weight == 0.0 { 0.0 } else { weight },
        })
    }

    /// Parse raw text fields in form order, reporting the first rejected one.
    pub fn parse(
        name: &str,
        sets: &str,
        reps: &str,
        weight: &str,
    ) -> Result<Self, ValidationError> {
        let name = input::parse_name(name)?;
        let sets = input::parse_sets(sets)?;
        let reps = input::parse_reps(reps)?;
        let weight = input::parse_weight(weight)?;
        Self::new(&name, sets, reps, weight)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sets(&self) -> u32 {
        self.sets
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// One logged exercise. Never changes after it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    entry: WorkoutEntry,
    logged_at: NaiveDateTime,
}

impl WorkoutRecord {
    pub fn new(name: &str, sets: u32, reps: u32, weight: f64) -> Result<Self, ValidationError> {
        let entry = WorkoutEntry::new(name, sets, reps, weight)?;
        Ok(Self::stamp(entry, SystemClock.now()))
    }

    pub fn stamp(entry: WorkoutEntry, logged_at: NaiveDateTime) -> Self {
        Self { entry, logged_at }
    }

    pub fn name(&self) -> &str {
        self.entry.name()
    }

    pub fn sets(&self) -> u32 {
        self.entry.sets()
    }

    pub fn reps(&self) -> u32 {
        self.entry.reps()
    }

    pub fn weight(&self) -> f64 {
        self.entry.weight()
    }

    pub fn logged_at(&self) -> NaiveDateTime {
        self.logged_at
    }
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exercise: {}, Sets: {}, Reps: {}, Weight: {:.2}, Date: {}",
            self.name(),
            self.sets(),
            self.reps(),
            self.weight(),
            self.logged_at.format(DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use regex::Regex;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn display_format() {
        let entry = WorkoutEntry::new("Bench Press", 3, 10, 80.0).unwrap();
        let record = WorkoutRecord::stamp(entry, at(7, 5, 3));
        assert_eq!(
            record.to_string(),
            "Exercise: Bench Press, Sets: 3, Reps: 10, Weight: 80.00, Date: 2024-03-09 07:05:03"
        );
    }

    #[test]
    fn weight_rounds_to_two_places() {
        let entry = WorkoutEntry::new("Curl", 2, 12, 12.3456).unwrap();
        let record = WorkoutRecord::stamp(entry, at(18, 0, 0));
        assert!(record.to_string().contains("Weight: 12.35,"));

        let entry = WorkoutEntry::new("Plank", 1, 1, 0.0).unwrap();
        let record = WorkoutRecord::stamp(entry, at(18, 0, 0));
        assert!(record.to_string().contains("Weight: 0.00,"));
    }

    #[test]
    fn new_stamps_current_time() {
        let before = SystemClock.now();
        let record = WorkoutRecord::new("Squat", 4, 8, 100.0).unwrap();
        let after = SystemClock.now();
        assert!(record.logged_at() >= before && record.logged_at() <= after);

        let line = Regex::new(
            r"^Exercise: Squat, Sets: 4, Reps: 8, Weight: 100\.00, Date: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$",
        )
        .unwrap();
        assert!(line.is_match(&record.to_string()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            WorkoutRecord::new("Squat", 0, 8, 100.0),
            Err(ValidationError::Range(Field::Sets))
        );
        assert_eq!(
            WorkoutRecord::new("Squat", 4, 0, 100.0),
            Err(ValidationError::Range(Field::Reps))
        );
        assert_eq!(
            WorkoutRecord::new("Squat", 4, 8, -0.5),
            Err(ValidationError::Range(Field::Weight))
        );
        assert_eq!(
            WorkoutRecord::new("Squat", 4, 8, f64::NAN),
            Err(ValidationError::Format(Field::Weight))
        );
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            WorkoutRecord::new("", 3, 10, 80.0),
            Err(ValidationError::EmptyField(Field::Name))
        );
        assert_eq!(
            WorkoutRecord::new("  \t", 3, 10, 80.0),
            Err(ValidationError::EmptyField(Field::Name))
        );
    }

    #[test]
    fn name_is_trimmed() {
        let entry = WorkoutEntry::new("  Deadlift ", 1, 5, 140.0).unwrap();
        assert_eq!(entry.name(), "Deadlift");
    }

    #[test]
    fn parse_reports_first_bad_field() {
        let err = WorkoutEntry::parse("", "x", "-1", "-2").unwrap_err();
        assert_eq!(err, ValidationError::EmptyField(Field::Name));

        let err = WorkoutEntry::parse("Row", "3", "ten", "-2").unwrap_err();
        assert_eq!(err, ValidationError::Format(Field::Reps));

        let entry = WorkoutEntry::parse(" Row ", " 3", "10 ", "60.5").unwrap();
        assert_eq!(entry.name(), "Row");
        assert_eq!((entry.sets(), entry.reps()), (3, 10));
        assert_eq!(entry.weight(), 60.5);
    }
}
