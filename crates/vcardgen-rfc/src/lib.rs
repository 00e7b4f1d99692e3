//! vCard (RFC 6350) contact model and text formatter.

pub mod error;
pub mod rfc;
