//! vCard parameter types (RFC 6350 §5).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A recognized parameter key.
///
/// Variants are declared in emission order, so the derived `Ord` matches
/// [`ParamKey::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKey {
    Label,
    Language,
    Value,
    Pref,
    AltId,
    Pid,
    Type,
    Mediatype,
    Calscale,
    SortAs,
    Geo,
    Timezone,
    Encoding,
}

impl ParamKey {
    /// Every key in the order parameters are written out.
    pub const ALL: [Self; 13] = [
        Self::Label,
        Self::Language,
        Self::Value,
        Self::Pref,
        Self::AltId,
        Self::Pid,
        Self::Type,
        Self::Mediatype,
        Self::Calscale,
        Self::SortAs,
        Self::Geo,
        Self::Timezone,
        Self::Encoding,
    ];

    /// Returns the parameter name as written in the content line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Label => "LABEL",
            Self::Language => "LANGUAGE",
            Self::Value => "VALUE",
            Self::Pref => "PREF",
            Self::AltId => "ALTID",
            Self::Pid => "PID",
            Self::Type => "TYPE",
            Self::Mediatype => "MEDIATYPE",
            Self::Calscale => "CALSCALE",
            Self::SortAs => "SORT-AS",
            Self::Geo => "GEO",
            Self::Timezone => "TZ",
            Self::Encoding => "ENCODING",
        }
    }

    /// Returns the key as used in contact snapshots (`sortAs`, `altId`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Language => "language",
            Self::Value => "value",
            Self::Pref => "pref",
            Self::AltId => "altId",
            Self::Pid => "pid",
            Self::Type => "type",
            Self::Mediatype => "mediatype",
            Self::Calscale => "calscale",
            Self::SortAs => "sortAs",
            Self::Geo => "geo",
            Self::Timezone => "timezone",
            Self::Encoding => "encoding",
        }
    }

    /// Looks up a key by its snapshot name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// Parameters attached to a property.
///
/// Holds at most one free-text value per [`ParamKey`]. Keys outside the
/// recognized set are dropped when a snapshot is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Option<String>>",
    into = "BTreeMap<String, Option<String>>"
)]
pub struct Params {
    values: BTreeMap<ParamKey, String>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set with `key` assigned.
    #[must_use]
    pub fn with(mut self, key: ParamKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Assigns a value, replacing any previous one.
    pub fn set(&mut self, key: ParamKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: ParamKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Returns whether no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the set parameters in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new().with(ParamKey::Type, value)
    }

    /// Creates a PREF parameter with priority (1-100).
    #[must_use]
    pub fn pref(priority: u8) -> Self {
        Self::new().with(ParamKey::Pref, priority.to_string())
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::new().with(ParamKey::Value, type_name)
    }

    /// Creates a LABEL parameter (formatted address text).
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::new().with(ParamKey::Label, text)
    }

    /// Creates a LANGUAGE parameter.
    #[must_use]
    pub fn language(tag: impl Into<String>) -> Self {
        Self::new().with(ParamKey::Language, tag)
    }

    /// Creates a MEDIATYPE parameter.
    #[must_use]
    pub fn mediatype(value: impl Into<String>) -> Self {
        Self::new().with(ParamKey::Mediatype, value)
    }

    /// Creates an ENCODING parameter (used by 3.0 inline photos).
    #[must_use]
    pub fn encoding(value: impl Into<String>) -> Self {
        Self::new().with(ParamKey::Encoding, value)
    }
}

impl From<BTreeMap<String, Option<String>>> for Params {
    fn from(raw: BTreeMap<String, Option<String>>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(name, value)| Some((ParamKey::from_name(&name)?, value?)))
            .collect();
        Self { values }
    }
}

impl From<Params> for BTreeMap<String, Option<String>> {
    fn from(params: Params) -> Self {
        params
            .values
            .into_iter()
            .map(|(key, value)| (key.name().to_string(), Some(value)))
            .collect()
    }
}
