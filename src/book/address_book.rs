//! Name-keyed store of contact records.

use super::pages::Pages;
use crate::error::StorageResult;
use crate::models::Record;
use crate::repositories::{BookRepository, JsonFileRepository};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::Path;

/// A mapping from contact name to [`Record`].
///
/// Every key equals the name of its record. Iteration follows the order in
/// which names were first added; replacing a record keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            tracing::debug!("Replaced record for {:?}", key);
        } else {
            self.order.push(key);
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Edit the record named `name` in place and return the closure's result.
    ///
    /// Returns `None` if no such record exists. If the edit leaves the record
    /// under a different name, it is re-keyed under that name. A record
    /// already stored under the new name is replaced and its position kept.
    pub fn update<T>(&mut self, name: &str, edit: impl FnOnce(&mut Record) -> T) -> Option<T> {
        let record = self.records.get_mut(name)?;
        let result = edit(record);
        if record.name() != name {
            self.rekey(name);
        }
        Some(result)
    }

    fn rekey(&mut self, old: &str) {
        let Some(record) = self.records.remove(old) else {
            return;
        };
        let new = record.name().to_string();
        tracing::debug!("Record {:?} renamed to {:?}", old, new);

        let replaced = self.records.insert(new.clone(), record).is_some();
        if replaced {
            self.order.retain(|key| key != old);
        } else if let Some(key) = self.order.iter_mut().find(|key| key.as_str() == old) {
            *key = new;
        }
    }

    /// Remove the record named `name`. Returns whether one existed.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_none() {
            return false;
        }
        self.order.retain(|key| key != name);
        true
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in iteration order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Split a snapshot of the current records into pages of at most `page_size`.
    ///
    /// Call again to restart from the first page.
    pub fn iterate(&self, page_size: usize) -> Pages {
        Pages::new(self.records().cloned().collect(), page_size)
    }

    /// Records whose name, or any of whose phones, contains `query`.
    ///
    /// Matching is case-sensitive.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records()
            .filter(|record| {
                record.name().contains(query)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// Records whose next birthday is at most `within_days` after `today`,
    /// nearest first.
    pub fn upcoming_birthdays(&self, within_days: i64, today: NaiveDate) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .records()
            .filter_map(|record| {
                record
                    .days_to_birthday_from(today)
                    .filter(|days| *days <= within_days)
                    .map(|days| (record, days))
            })
            .collect();
        upcoming.sort_by_key(|(_, days)| *days);
        upcoming
    }

    /// Write the whole book to `path`, overwriting any existing file.
    pub fn persist(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        JsonFileRepository::new(path.as_ref()).save(self)
    }

    /// Read a book from `path`. A missing file yields an empty book.
    pub fn load(path: impl AsRef<Path>) -> StorageResult<Self> {
        JsonFileRepository::new(path.as_ref()).load()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}
