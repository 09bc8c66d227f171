//! Parsing of raw text fields typed into a front-end.

use crate::errors::{Field, ValidationError};

pub fn parse_name(text: &str) -> Result<String, ValidationError> {
    let name = text.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField(Field::Name));
    }
    Ok(name.to_string())
}

pub fn parse_sets(text: &str) -> Result<u32, ValidationError> {
    parse_count(text, Field::Sets)
}

pub fn parse_reps(text: &str) -> Result<u32, ValidationError> {
    parse_count(text, Field::Reps)
}

pub fn parse_weight(text: &str) -> Result<f64, ValidationError> {
    let weight: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::Format(Field::Weight))?;
    if !weight.is_finite() {
        return Err(ValidationError::Format(Field::Weight));
    }
    if weight < 0.0 {
        return Err(ValidationError::Range(Field::Weight));
    }
    Ok(weight)
}

fn parse_count(text: &str, field: Field) -> Result<u32, ValidationError> {
    let value: i32 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::Format(field))?;
    if value <= 0 {
        return Err(ValidationError::Range(field));
    }
    Ok(value as u32)
}
