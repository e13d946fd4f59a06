//! One-way import of the old `name:phone` text format.
//!
//! Each line holds one contact and one phone separated by a colon. The
//! format is only read, never written.

use crate::book::AddressBook;
use crate::error::StorageResult;
use crate::models::Record;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Reads a legacy `name:phone` file into an [`AddressBook`].
#[derive(Debug, Clone)]
pub struct LegacyTextImporter {
    path: PathBuf,
}

impl LegacyTextImporter {
    /// Create an importer for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Import the file. A missing file yields an empty book.
    ///
    /// Malformed lines and invalid phones are skipped with a warning. A name
    /// that appears on several lines collects all of its valid phones.
    pub fn import(&self) -> StorageResult<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AddressBook::new()),
            Err(e) => return Err(e.into()),
        };
        self.import_from(BufReader::new(file))
    }

    /// Import from any line-oriented reader.
    pub fn import_from(&self, reader: impl BufRead) -> StorageResult<AddressBook> {
        let mut book = AddressBook::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((name, phone)) = line.split_once(':') else {
                tracing::warn!("Skipping legacy line {}: missing ':' separator", index + 1);
                continue;
            };

            if book.find(name).is_none() {
                book.add_record(Record::from_name(name));
            }
            if let Some(Err(e)) = book.update(name, |record| record.add_phone(phone)) {
                tracing::warn!("Skipping phone on legacy line {}: {}", index + 1, e);
            }
        }

        tracing::info!(
            "Imported {} contacts from legacy file {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }
}
