use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::BookStore;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock book store for testing.
///
/// Keeps the "persisted" book in memory, can be told to fail, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookStore {
    stored: Arc<Mutex<Option<AddressBook>>>,
    failing: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookStore {
    /// Create a store with nothing persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.stored.lock().unwrap() = Some(book);
        store
    }

    /// Make every following load and save fail with an I/O error.
    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_failing(&self) -> StorageResult<()> {
        if *self.failing.lock().unwrap() {
            return Err(StorageError::Io {
                path: PathBuf::from("mock.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "disk says no"),
            });
        }
        Ok(())
    }
}

impl BookStore for MockBookStore {
    fn load(&self) -> StorageResult<Option<AddressBook>> {
        self.track_call("load");
        self.check_failing()?;
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        self.check_failing()?;
        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
