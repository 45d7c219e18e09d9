//! Contact Book - a command-line address book.
//!
//! Stores names, phone numbers and birthdays, answers lookups and edits,
//! reports whose birthday falls in the coming week, and keeps everything in
//! a JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: Contact records and the address book
//! - **birthdays**: Weekly birthday scheduling
//! - **repositories**: Persistence of the address book
//! - **commands**: Command table, handlers and dispatcher
//! - **repl**: The interactive read-eval-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod birthdays;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;

pub use birthdays::WeeklyBirthdays;
pub use commands::{CommandContext, CommandTable, Dispatcher, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use repl::Session;
pub use repositories::{BookStore, JsonFileStore};
