//! The address book: records keyed by contact name.

use super::record::Record;
use crate::birthdays::{self, WeeklyBirthdays};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// A collection of [`Record`]s keyed by name.
///
/// Records keep the order in which their names were first inserted;
/// overwriting a name keeps its original slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str();
        match self.index.get(key) {
            Some(&slot) => {
                debug!(contact = key, "Replacing record");
                self.records[slot] = record;
            }
            None => {
                debug!(contact = key, "Inserting record");
                self.index.insert(key.to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    /// Look up a record by name for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&slot) => Some(&mut self.records[slot]),
            None => None,
        }
    }

    /// The record for `name`, creating an empty one if it does not exist.
    pub fn find_or_create(&mut self, name: &str) -> &mut Record {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                self.add_record(Record::new(name));
                self.records.len() - 1
            }
        };
        &mut self.records[slot]
    }

    /// Whether a record is filed under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All records in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fold `other` into this book. Records from `other` win on name clashes.
    pub fn merge(&mut self, other: AddressBook) {
        for record in other.records {
            self.add_record(record);
        }
    }

    /// Contacts whose birthday falls in the week starting `today`.
    ///
    /// See [`birthdays::weekly_birthdays`] for the rules.
    pub fn weekly_birthdays(&self, today: NaiveDate) -> WeeklyBirthdays {
        let entries = self
            .records
            .iter()
            .filter_map(|record| record.birthday().map(|b| (record.name(), b)));
        birthdays::weekly_birthdays(entries, today)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
