//! Contact Book - a command-line contact manager.
//!
//! This library stores names, phone numbers, and birthdays, supports
//! add/change/show/search operations, and persists the whole address book
//! to disk between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (names, phones, birthdays)
//! - **models**: The contact record aggregate
//! - **book**: The name-keyed address book store and its pagination
//! - **repositories**: Persistence of a whole book (JSON file, legacy text import)
//! - **commands**: Parsing and running text commands
//! - **repl**: The interactive loop used by the binary
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;

pub use book::{AddressBook, Pages};
pub use commands::{Command, CommandHandler, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::Record;
pub use repositories::{BookRepository, JsonFileRepository, LegacyTextImporter};
