//! vCard implementation (RFC 6350).
//!
//! This module provides the contact model and the formatter that turns it
//! into vCard text. Output is write-only: there is no parser.
//!
//! ## Usage
//!
//! ```rust
//! use vcardgen_rfc::rfc::vcard::{ContactRecord, Params, format};
//!
//! let mut card = ContactRecord::new();
//! card.add_first_name("Jane");
//! card.add_last_name("Doe");
//! card.add_email("jane@example.com", Params::type_param("work"));
//!
//! let output = format(card.snapshot()).unwrap();
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! assert!(output.contains("EMAIL;TYPE=work:jane@example.com\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Contact model (`Contact`, `ContactRecord`, `Params`, etc.)
//! - [`build`] - Formatting and escaping functions

pub mod build;
pub mod core;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{format, format_with_version};
pub use self::core::{
    Address, Contact, ContactRecord, MultiTextProperty, ParamKey, Params, StructuredName,
    TextProperty, VCardVersion,
};
