//! Structured vCard types (RFC 6350).
//!
//! These types represent the structured N and ADR property values.

use serde::{Deserialize, Serialize};

use super::parameter::Params;

/// Contact name (FN and N properties, RFC 6350 §6.2.1-6.2.2).
///
/// Each component may hold several values, e.g. two family names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredName {
    /// Formatted names; only the first is written.
    #[serde(rename = "fullNames")]
    pub full: Vec<String>,
    /// Given names (first names).
    #[serde(rename = "firstNames")]
    pub given: Vec<String>,
    /// Additional names (middle names).
    #[serde(rename = "middleNames")]
    pub additional: Vec<String>,
    /// Family names (surnames).
    #[serde(rename = "lastNames")]
    pub family: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    #[serde(rename = "honorificsPre")]
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    #[serde(rename = "honorificsSuf")]
    pub suffixes: Vec<String>,
    /// Parameters written on the FN line.
    #[serde(skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl StructuredName {
    /// Creates an empty name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }

    /// Returns whether no component, including the full name, holds a
    /// non-empty value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name().is_none() && !self.has_components()
    }

    /// Returns whether any N component holds a value.
    #[must_use]
    pub fn has_components(&self) -> bool {
        [
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ]
        .iter()
        .any(|list| list.iter().any(|s| !s.is_empty()))
    }

    /// Returns the first non-empty full name.
    ///
    /// Blank entries are skipped.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        first_non_empty(&self.full)
    }

    /// Builds a display name from the first non-empty value of each
    /// component: prefix, given, additional, family, suffix.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut name = String::new();
        for list in [
            &self.prefixes,
            &self.given,
            &self.additional,
            &self.family,
            &self.suffixes,
        ] {
            if let Some(first) = first_non_empty(list) {
                name.push_str(first);
                name.push(' ');
            }
        }
        name.truncate(name.trim_end().len());
        name
    }
}

fn first_non_empty(list: &[String]) -> Option<&str> {
    list.iter().map(String::as_str).find(|s| !s.is_empty())
}

/// Address (ADR property, RFC 6350 §6.3.1).
///
/// The post office box and extended address components are not modeled;
/// RFC 6350 advises leaving them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    /// Street address.
    pub street: Option<String>,
    /// Locality (city).
    pub locality: Option<String>,
    /// Region (state or province).
    pub region: Option<String>,
    /// Postal code.
    pub post_code: Option<String>,
    /// Country name.
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl Address {
    /// Returns the text components in output order.
    #[must_use]
    pub fn components(&self) -> [Option<&str>; 5] {
        [
            self.street.as_deref(),
            self.locality.as_deref(),
            self.region.as_deref(),
            self.post_code.as_deref(),
            self.country.as_deref(),
        ]
    }

    /// Returns whether every text component is absent or empty.
    ///
    /// Parameters are not considered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components()
            .into_iter()
            .all(|c| c.is_none_or(str::is_empty))
    }
}
