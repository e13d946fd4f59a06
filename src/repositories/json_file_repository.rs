//! JSON file persistence for address books.
//!
//! The file holds one document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "John", "phones": ["1112223333"], "birthday": "1990-01-01" }
//!   ]
//! }
//! ```
//!
//! Records appear in book order, so a load restores the same iteration order.

use super::traits::BookRepository;
use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct BookDocumentRef<'a> {
    version: u32,
    records: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct BookDocument {
    version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

/// Stores an address book as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let document: BookDocument = serde_json::from_reader(BufReader::new(file))?;
        if document.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(document.version));
        }

        let book: AddressBook = document.records.into_iter().collect();
        tracing::info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let document = BookDocumentRef {
            version: FORMAT_VERSION,
            records: book.records().collect(),
        };

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
