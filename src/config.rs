//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_BOOK_PATH;
use std::env;
use std::path::PathBuf;

/// Default REPL prompt.
pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address book file (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Prompt printed before each command (default: "Enter command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Address book file (default: "addressbook.json")
    /// - `ADDRESS_BOOK_PROMPT`: REPL prompt (default: "Enter command: ")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path =
            env::var("ADDRESS_BOOK_PATH").unwrap_or_else(|_| DEFAULT_BOOK_PATH.to_string());
        if book_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let prompt =
            env::var("ADDRESS_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let log_level = Self::parse_log_level("LOG_LEVEL", "warn")?;

        Ok(Config {
            book_path: PathBuf::from(book_path),
            prompt,
            log_level,
        })
    }

    /// Read a log level variable, validating it against [`LOG_LEVELS`].
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "warn".to_string(),
        }
    }
}
