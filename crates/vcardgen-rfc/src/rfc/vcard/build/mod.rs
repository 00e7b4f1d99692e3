//! vCard serialization (RFC 6350).
//!
//! This module turns a [`Contact`](crate::rfc::vcard::core::Contact) into
//! vCard text.
//!
//! ## Usage
//!
//! ```rust
//! use vcardgen_rfc::rfc::vcard::build::format;
//! use vcardgen_rfc::rfc::vcard::core::{Contact, StructuredName};
//!
//! let contact = Contact::with_name(StructuredName::simple("Doe", "John"));
//! let output = format(&contact).unwrap();
//! assert_eq!(output, "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nN:Doe;John;;;\r\nEND:VCARD");
//! ```
//!
//! ## Features
//!
//! - Fixed property order (FN, N, NICKNAME, PHOTO, ADR, TEL, EMAIL, TITLE,
//!   ROLE, ORG, NOTE, URL, REV, UID)
//! - Text escaping per RFC 6350
//! - Parameters in a fixed key order, quoted when they contain `:;,`
//! - Structured value serialization (N, ADR, ORG)
//! - No line folding; lines are joined with CRLF

mod escape;
mod formatter;

pub use escape::{escape_component, escape_param_value, escape_text};
pub use formatter::{format, format_with_version};
