//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the atomic fields of a
//! contact: its name, its phone numbers and its birthday. Phones and
//! birthdays are validated at construction time, so an invalid value can
//! never be stored on a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
