use crate::domain::ValidationError;
use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::traits::BookStore;
use serde::de::{MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default file name for the stored address book.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// One contact as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
struct StoredContact {
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    birthday: Option<String>,
}

impl From<&Record> for StoredContact {
    fn from(record: &Record) -> Self {
        Self {
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
        }
    }
}

impl StoredContact {
    /// Rebuild a record, running every stored value through validation.
    fn into_record(self, name: String) -> Result<Record, ValidationError> {
        let mut record = Record::new(name);
        for phone in &self.phones {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = &self.birthday {
            record.add_birthday(birthday)?;
        }
        Ok(record)
    }
}

/// Serializes a book as a JSON object in record order.
struct BookDocument<'a>(&'a AddressBook);

impl Serialize for BookDocument<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.0
                .all()
                .map(|record| (record.name().as_str(), StoredContact::from(record))),
        )
    }
}

/// The stored document with contacts in file order.
struct StoredBook(Vec<(String, StoredContact)>);

impl<'de> Deserialize<'de> for StoredBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StoredBookVisitor;

        impl<'de> Visitor<'de> for StoredBookVisitor {
            type Value = StoredBook;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of contact names to contact entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, StoredContact>()? {
                    entries.push(entry);
                }
                Ok(StoredBook(entries))
            }
        }

        deserializer.deserialize_map(StoredBookVisitor)
    }
}

/// Address book store backed by a single JSON file.
///
/// The file holds one object mapping each contact name to
/// `{"phones": [...], "birthday": "DD.MM.YYYY" | null}`, indented with four
/// spaces. A missing file reads as "nothing stored"; a file with a bad
/// phone or birthday fails to load.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Json {
            path: self.path.clone(),
            source,
        }
    }

    /// Render `book` as the on-disk JSON document.
    pub fn to_json(&self, book: &AddressBook) -> StorageResult<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        BookDocument(book)
            .serialize(&mut serializer)
            .map_err(|e| self.json_error(e))?;
        Ok(out)
    }

    /// Parse an on-disk JSON document into a book.
    pub fn from_json(&self, contents: &str) -> StorageResult<AddressBook> {
        let stored: StoredBook =
            serde_json::from_str(contents).map_err(|e| self.json_error(e))?;

        let mut book = AddressBook::new();
        for (name, contact) in stored.0 {
            let record = contact
                .into_record(name.clone())
                .map_err(|source| StorageError::InvalidRecord { name, source })?;
            book.add_record(record);
        }
        Ok(book)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_BOOK_PATH)
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StorageResult<Option<AddressBook>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored address book");
                return Ok(None);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book = self.from_json(&contents)?;
        info!(path = %self.path.display(), contacts = book.len(), "Address book loaded");
        Ok(Some(book))
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = self.to_json(book)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        info!(path = %self.path.display(), contacts = book.len(), "Address book saved");
        Ok(())
    }
}
