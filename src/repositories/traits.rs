use crate::book::AddressBook;
use crate::error::StorageResult;

/// Repository for persisting a whole address book.
///
/// Provides abstraction over the storage medium, enabling different
/// implementations (file, in-memory mock). The book is small, so it is
/// always read and written in full.
pub trait BookRepository {
    /// Read the stored book. A medium with nothing stored yet yields an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
