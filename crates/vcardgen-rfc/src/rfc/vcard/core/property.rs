//! vCard property types (RFC 6350).

use serde::{Deserialize, Serialize};

use super::parameter::Params;

/// A property holding one text value (TEL, EMAIL, NOTE, ...).
///
/// A missing or empty value means the property is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextProperty {
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl TextProperty {
    /// Creates a property with a value and no parameters.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            params: Params::new(),
        }
    }

    /// Creates a property with a value and parameters.
    #[must_use]
    pub fn with_params(value: impl Into<String>, params: Params) -> Self {
        Self {
            value: Some(value.into()),
            params,
        }
    }

    /// Returns the value when it is present and non-empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

/// A property holding an ordered list of values (ORG).
///
/// For organizations the first value is the name and the rest are units in
/// decreasing order of specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiTextProperty {
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl MultiTextProperty {
    /// Creates an organization value: `name` followed by `units`.
    #[must_use]
    pub fn organization<I, S>(name: impl Into<String>, units: I, params: Params) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = vec![name.into()];
        values.extend(units.into_iter().map(Into::into));
        Self { values, params }
    }

    /// Returns whether the property has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Property names written by the formatter.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const ADR: &str = "ADR";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const ORG: &str = "ORG";
    pub const NOTE: &str = "NOTE";
    pub const URL: &str = "URL";
    pub const REV: &str = "REV";
    pub const UID: &str = "UID";

    // General/structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
}
