//! Data models for the contact book.
//!
//! A [`Record`] holds one contact; an [`AddressBook`] owns the records and
//! answers lookups and the weekly birthday query.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::{Record, BIRTHDAY_NOT_SET};
