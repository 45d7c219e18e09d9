//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must have 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Birthday must be in the format DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
