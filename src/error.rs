//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed its format check
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The record already has a birthday
    #[error("Birthday is already set")]
    BirthdayAlreadySet,

    /// The phone to edit is not on the record
    #[error("Phone {0} not found")]
    PhoneNotFound(String),
}

/// Errors that can occur while loading or saving an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid address book
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file was written by an incompatible format version
    #[error("Unsupported address book version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur while parsing or running a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The verb is not recognized
    #[error("Sorry, I didn't understand you.")]
    Unknown(String),

    /// Required arguments are missing
    #[error("Insufficient information provided. Usage: {0}")]
    MissingArguments(&'static str),

    /// An argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No contact with the given name exists
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The record rejected the change
    #[error("{0}")]
    Record(#[from] RecordError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Record(RecordError::Validation(err))
    }
}
