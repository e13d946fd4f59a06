//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts unpadded fields such as `1990-1-5`.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birthday pattern is a valid regex")
});

/// A birthday in strict `YYYY-MM-DD` form.
///
/// The raw string is kept exactly as given, next to the parsed calendar date.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-17").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-17");
/// assert!(Birthday::new("17-05-1990").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the value is not
    /// zero-padded `YYYY-MM-DD` or does not name a real date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        match Self::parse(&raw) {
            Some(date) => Ok(Self { raw, date }),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Replace the stored date, re-validating it.
    ///
    /// On failure the previous date is kept.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(value)?;
        Ok(())
    }

    fn parse(raw: &str) -> Option<NaiveDate> {
        if !BIRTHDAY_PATTERN.is_match(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).ok()
    }

    /// The calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the birthday as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("1990-01-01").unwrap();
        assert_eq!(birthday.as_str(), "1990-01-01");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    }

    #[test]
    fn test_birthday_leap_day() {
        assert!(Birthday::new("2000-02-29").is_ok());
        assert!(Birthday::new("2001-02-29").is_err());
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("01-01-1990").is_err());
        assert!(Birthday::new("1990/01/01").is_err());
        assert!(Birthday::new("not-a-date").is_err());
        assert!(Birthday::new("1990-1-1").is_err());
        assert!(Birthday::new("1990-01").is_err());
        assert!(Birthday::new("1990-13-01").is_err());
        assert!(Birthday::new("1990-02-30").is_err());
        assert!(Birthday::new(" 1990-01-01").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_set_keeps_old_value_on_failure() {
        let mut birthday = Birthday::new("1990-01-01").unwrap();
        assert!(birthday.set("1990/02/02").is_err());
        assert_eq!(birthday.as_str(), "1990-01-01");
    }

    #[test]
    fn test_birthday_serde() {
        let birthday = Birthday::new("1985-12-24").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1985-12-24\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);

        let bad: Result<Birthday, _> = serde_json::from_str("\"24.12.1985\"");
        assert!(bad.is_err());
    }
}
