//! Name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a contact.
///
/// Names carry no format constraint; any string, including the empty
/// string, is accepted. The name is also the key of a record inside an
/// [`AddressBook`](crate::book::AddressBook).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Replace the stored name.
    pub fn set(&mut self, name: impl Into<String>) {
        self.0 = name.into();
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
