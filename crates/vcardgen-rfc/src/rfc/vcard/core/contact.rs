//! Contact snapshot.

use serde::{Deserialize, Serialize};

use super::property::{MultiTextProperty, TextProperty};
use super::structured::{Address, StructuredName};

/// The full state of a contact, as handed to the formatter.
///
/// Every nested value is owned; cloning a `Contact` yields a fully
/// independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub name: StructuredName,
    pub nicknames: Vec<TextProperty>,
    pub photos: Vec<TextProperty>,
    pub addresses: Vec<Address>,
    pub phones: Vec<TextProperty>,
    pub emails: Vec<TextProperty>,
    pub titles: Vec<TextProperty>,
    pub roles: Vec<TextProperty>,
    pub organizations: Vec<MultiTextProperty>,
    pub notes: Vec<TextProperty>,
    #[serde(alias = "url")]
    pub urls: Vec<TextProperty>,
    pub revision: Option<TextProperty>,
    pub uid: Option<TextProperty>,
}

impl Contact {
    /// Creates an empty contact.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a contact holding only a name.
    #[must_use]
    pub fn with_name(name: StructuredName) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}
