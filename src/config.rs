//! Configuration management for the contact book.
//!
//! This module loads configuration from environment variables, optionally
//! seeded from a `.env` file. Every setting has a default, so an empty
//! environment is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the address book file.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address book file (default: `address_book.json`)
    pub book_path: PathBuf,

    /// Records per page for `show all` (default: 10)
    pub page_size: usize,

    /// Legacy `name:phone` file imported when the book file does not exist yet
    pub legacy_import_path: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_BOOK_PATH`: Address book file (default: `address_book.json`)
    /// - `CONTACTS_PAGE_SIZE`: Records per page, at least 1 (default: 10)
    /// - `CONTACTS_LEGACY_IMPORT`: Legacy text file to import on first run
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = Self::parse_env_path("CONTACTS_BOOK_PATH")?
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_PATH));

        let page_size = Self::parse_env_usize("CONTACTS_PAGE_SIZE", 10)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let legacy_import_path = Self::parse_env_path("CONTACTS_LEGACY_IMPORT")?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            page_size,
            legacy_import_path,
            log_level,
        })
    }

    /// Parse an environment variable as a non-empty path.
    fn parse_env_path(var_name: &str) -> ConfigResult<Option<PathBuf>> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(Some(PathBuf::from(val))),
            Err(_) => Ok(None),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            page_size: 10,
            legacy_import_path: None,
            log_level: "error".to_string(),
        }
    }
}
