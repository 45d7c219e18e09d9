//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while reading or writing the address book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid address book document
    #[error("Malformed address book {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored phone or birthday failed validation
    #[error("Invalid stored data for contact '{name}': {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// Errors a command handler can return.
///
/// The dispatcher turns every variant into a reply line; none of them ends
/// the session.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A phone or birthday argument was malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact is not in the book
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Too few arguments were given; `needs` names what is missing
    #[error("Give me {needs} please.")]
    Arity { needs: &'static str },

    /// The contact exists but has no phone numbers
    #[error("{0} has no phone numbers.")]
    NoPhones(String),

    /// Saving or loading failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "Must be one of trace|debug|info|warn|error|off, got: loud".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid value for LOG_LEVEL:"));

        let err = CommandError::NotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found: John");

        let err = CommandError::Arity {
            needs: "name and phone",
        };
        assert_eq!(err.to_string(), "Give me name and phone please.");

        let err = CommandError::NoPhones("John".to_string());
        assert_eq!(err.to_string(), "John has no phone numbers.");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: CommandError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Phone number must have 10 digits.");
    }

    #[test]
    fn test_storage_error_names_contact() {
        let err = StorageError::InvalidRecord {
            name: "John".to_string(),
            source: ValidationError::InvalidBirthday("31.02.2020".to_string()),
        };
        assert!(err.to_string().contains("'John'"));
        assert!(err.to_string().contains("DD.MM.YYYY"));
    }
}
