//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an ordered list of phones, and at most one birthday.
///
/// Records are only mutated through their own methods, so every stored
/// field always satisfies its format check. Duplicate phones within one
/// record are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and an optional birthday.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if `birthday` is malformed.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> RecordResult<Self> {
        let birthday = birthday.map(Birthday::new).transpose()?;
        Ok(Self {
            birthday,
            ..Self::from_name(name)
        })
    }

    /// Create a record with only a name.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Absent phones are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == phone) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not on the record.
    /// - `RecordError::Validation` if `new` is malformed; the old phone stays.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let phone = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        phone.set(new)?;
        Ok(())
    }

    /// First phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday. A record's birthday can only be set once.
    ///
    /// # Errors
    ///
    /// - `RecordError::BirthdayAlreadySet` if a birthday exists, whatever `birthday` is.
    /// - `RecordError::Validation` if `birthday` is malformed.
    pub fn set_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        if self.birthday.is_some() {
            return Err(RecordError::BirthdayAlreadySet);
        }
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Days from today until the next birthday, `0` when it is today.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's month and day.
    ///
    /// A Feb 29 birthday falls on Feb 28 in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let born = self.birthday.as_ref()?.date();

        let mut next = anniversary(born, today.year())?;
        if today > next {
            next = anniversary(born, today.year() + 1)?;
        }

        Some((next - today).num_days())
    }
}

fn anniversary(born: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, born.month(), born.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
