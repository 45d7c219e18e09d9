//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use std::fmt;
use tracing::debug;

/// Shown when a record has no birthday.
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set";

/// A contact: a name, its phone numbers and an optional birthday.
///
/// The name never changes once the record exists. Phones keep insertion
/// order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The first phone number, if any.
    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.push_phone(Phone::new(phone)?);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: Phone) {
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`. Missing phones are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.position_of(phone) {
            debug!(contact = %self.name, phone, "Removing phone");
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`,
    /// keeping its position.
    ///
    /// `new_phone` is validated even when `old_phone` is not on the record;
    /// a missing `old_phone` is otherwise a no-op.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<(), ValidationError> {
        let new_phone = Phone::new(new_phone)?;
        if let Some(index) = self.position_of(old_phone) {
            debug!(contact = %self.name, old = old_phone, new = %new_phone, "Editing phone");
            self.phones[index] = new_phone;
        }
        Ok(())
    }

    /// Parse and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(birthday)?;
        debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The birthday as `DD.MM.YYYY`, or [`BIRTHDAY_NOT_SET`].
    pub fn birthday_display(&self) -> String {
        match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => BIRTHDAY_NOT_SET.to_string(),
        }
    }

    /// One-line listing: name and `; `-joined phones.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
