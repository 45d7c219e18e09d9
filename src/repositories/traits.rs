use crate::error::StorageResult;
use crate::models::AddressBook;

/// Persistent storage for an address book.
///
/// Provides abstraction over where the book is kept, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookStore {
    /// Read the stored book.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> StorageResult<Option<AddressBook>>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
