//! Field validators for the comment form.
//!
//! Each field runs its rules in order and reports every rule that fails, so
//! an empty author shows both "Required" and the minimum length message.
use crate::models::comment::Rating;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Rating,
    Author,
    Text,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Rating, Field::Author, Field::Text];

    pub const AUTHOR_MIN: usize = 2;
    pub const AUTHOR_MAX: usize = 15;
    pub const TEXT_MAX: usize = 100;

    /// Runs every rule for this field against `value`.
    pub fn validate(self, value: &str) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match self {
            Field::Rating => {
                if parse_rating(value).is_none() {
                    errors.push(FieldError::Required);
                }
            }
            Field::Author => {
                if !required(value) {
                    errors.push(FieldError::Required);
                }
                if !min_length(value, Self::AUTHOR_MIN) {
                    errors.push(FieldError::TooShort { min: Self::AUTHOR_MIN });
                }
                if !max_length(value, Self::AUTHOR_MAX) {
                    errors.push(FieldError::TooLong { field: self, max: Self::AUTHOR_MAX });
                }
            }
            Field::Text => {
                if !required(value) {
                    errors.push(FieldError::Required);
                }
                if !max_length(value, Self::TEXT_MAX) {
                    errors.push(FieldError::TooLong { field: self, max: Self::TEXT_MAX });
                }
            }
        }
        errors
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Required")]
    Required,
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
    #[error("{}", too_long_message(.field, .max))]
    TooLong { field: Field, max: usize },
}

fn too_long_message(field: &Field, max: &usize) -> String {
    match field {
        Field::Text => format!("Only {} characters allowed.", max),
        _ => format!("Must be {} characters or less.", max),
    }
}

pub fn required(value: &str) -> bool {
    !value.is_empty()
}

pub fn min_length(value: &str, len: usize) -> bool {
    !value.is_empty() && value.chars().count() >= len
}

pub fn max_length(value: &str, len: usize) -> bool {
    value.is_empty() || value.chars().count() <= len
}

/// The rating select carries its value as text; anything but "1".."5" is
/// treated as no selection.
pub fn parse_rating(value: &str) -> Option<Rating> {
    value.trim().parse::<u8>().ok().and_then(Rating::new)
}
