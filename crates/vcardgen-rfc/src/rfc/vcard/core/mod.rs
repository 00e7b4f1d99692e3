//! Core vCard types.

mod contact;
mod parameter;
mod property;
mod record;
mod structured;

pub use contact::Contact;
pub use parameter::{ParamKey, Params};
pub use property::{MultiTextProperty, TextProperty, names};
pub use record::ContactRecord;
pub use structured::{Address, StructuredName};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
}

impl VCardVersion {
    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }

    /// Selects the legacy 3.0 version when `legacy` is set.
    #[must_use]
    pub const fn from_legacy_flag(legacy: bool) -> Self {
        if legacy { Self::V3 } else { Self::V4 }
    }
}

impl std::str::FromStr for VCardVersion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0" => Ok(Self::V3),
            "4.0" => Ok(Self::V4),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
