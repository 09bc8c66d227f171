use std::fmt;
use thiserror::Error as ThisError;

/// The user-facing fields of a workout entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Sets,
    Reps,
    Weight,
}

impl Field {
    fn range_message(&self) -> &'static str {
        match self {
            Field::Name => "Exercise name cannot be empty.",
            Field::Sets => "Sets must be a positive number.",
            Field::Reps => "Reps must be a positive number.",
            Field::Weight => "Weight cannot be negative.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "exercise name"),
            Field::Sets => write!(f, "sets"),
            Field::Reps => write!(f, "reps"),
            Field::Weight => write!(f, "weight"),
        }
    }
}

/// Rejection of user input before a record is created.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Invalid input. Please enter a number for {0}.")]
    Format(Field),
    #[error("{}", .0.range_message())]
    Range(Field),
    #[error("Exercise name cannot be empty.")]
    EmptyField(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Format(field)
            | ValidationError::Range(field)
            | ValidationError::EmptyField(field) => *field,
        }
    }
}
