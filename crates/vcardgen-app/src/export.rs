//! Snapshot loading and formatting.

use std::path::Path;

use anyhow::{Context, Result};
use vcardgen_rfc::rfc::vcard::{Contact, VCardVersion, format_with_version};

/// ## Summary
/// Reads a JSON contact snapshot from `path` and formats it.
///
/// ## Errors
/// Returns an error if the file cannot be read, is not a valid snapshot, or
/// holds a contact without a name.
pub fn render_file(path: &Path, legacy: bool) -> Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = raw.len(), "Read contact snapshot");

    render_json(&raw, legacy).with_context(|| format!("failed to format {}", path.display()))
}

/// ## Summary
/// Parses a JSON contact snapshot and formats it.
///
/// ## Errors
/// Returns an error if the JSON is not a valid snapshot or the contact has
/// no name.
pub fn render_json(json: &str, legacy: bool) -> Result<String> {
    let contact: Contact = serde_json::from_str(json).context("invalid contact snapshot")?;
    Ok(format_with_version(
        &contact,
        VCardVersion::from_legacy_flag(legacy),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn render_json_v4() {
        let output = render_json(r#"{"name":{"fullNames":["Jane Doe"]}}"#, false)
            .expect("snapshot should render");
        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Doe\r\nEND:VCARD"
        );
    }

    #[test_log::test]
    fn render_json_legacy() {
        let output = render_json(r#"{"name":{"lastNames":["Doe"]}}"#, true)
            .expect("snapshot should render");
        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Doe\r\nN:Doe;;;;\r\nEND:VCARD"
        );
    }

    #[test_log::test]
    fn render_json_rejects_unnamed_contact() {
        let err = render_json(r#"{"emails":[{"value":"a@example.com"}]}"#, false)
            .expect_err("contact without name must fail");
        assert!(err.to_string().contains("Invalid record"));
    }

    #[test_log::test]
    fn render_json_rejects_bad_json() {
        let err = render_json("{", false).expect_err("truncated JSON must fail");
        assert!(err.to_string().contains("invalid contact snapshot"));
    }

    #[test_log::test]
    fn render_file_reports_missing_path() {
        let err = render_file(Path::new("/nonexistent/contact.json"), false)
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("failed to read"));
    }
}
