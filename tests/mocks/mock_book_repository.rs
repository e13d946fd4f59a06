use contact_book::error::{StorageError, StorageResult};
use contact_book::{AddressBook, BookRepository};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

/// Mock book repository for testing.
///
/// Keeps the saved book in memory, tracks method calls for verification,
/// and can be told to fail on save.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockBookRepository {
    stored: RefCell<Option<AddressBook>>,
    call_counts: RefCell<HashMap<String, usize>>,
    fail_saves: Cell<bool>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.borrow_mut() = Some(book);
        repo
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.borrow().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn record_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.record_call("load");
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.record_call("save");
        if self.fail_saves.get() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }
        *self.stored.borrow_mut() = Some(book.clone());
        Ok(())
    }
}
