//! vCard formatting.

use super::escape::{escape_component, escape_param_value, escape_text};
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::{
    Address, Contact, MultiTextProperty, ParamKey, Params, StructuredName, TextProperty,
    VCardVersion, names,
};

const CRLF: &str = "\r\n";
const BEGIN_LINE: &str = const_str::concat!(names::BEGIN, ":VCARD");
const END_LINE: &str = const_str::concat!(names::END, ":VCARD");
const VERSION_PREFIX: &str = const_str::concat!(names::VERSION, ":");

/// Formats a contact as a vCard 4.0 document.
///
/// ## Errors
/// Returns [`RfcError::InvalidRecord`] if the contact name has no non-empty
/// component.
pub fn format(contact: &Contact) -> RfcResult<String> {
    format_with_version(contact, VCardVersion::V4)
}

/// Formats a contact as a vCard document of the given version.
///
/// ## Summary
/// Lines are written in a fixed property order and joined with CRLF. The
/// document has no trailing line break and long lines are not folded.
/// Properties without a usable value are skipped.
///
/// ## Errors
/// Returns [`RfcError::InvalidRecord`] if the contact name has no non-empty
/// component, since FN is mandatory.
#[tracing::instrument(skip_all, fields(version = %version))]
pub fn format_with_version(contact: &Contact, version: VCardVersion) -> RfcResult<String> {
    tracing::debug!("Formatting vCard");

    let full_name = full_name_line(&contact.name).inspect_err(|err| {
        tracing::warn!(error = %err, "Rejecting contact without a name");
    })?;

    let mut lines = vec![
        BEGIN_LINE.to_string(),
        format!("{VERSION_PREFIX}{}", version.as_str()),
        full_name,
    ];

    if let Some(line) = name_components_line(&contact.name) {
        lines.push(line);
    }

    push_text_properties(&mut lines, names::NICKNAME, &contact.nicknames);
    push_text_properties(&mut lines, names::PHOTO, &contact.photos);

    for address in &contact.addresses {
        if address.is_empty() {
            tracing::trace!(property = names::ADR, "Skipping empty property");
            continue;
        }
        lines.push(address_line(address));
    }

    push_text_properties(&mut lines, names::TEL, &contact.phones);
    push_text_properties(&mut lines, names::EMAIL, &contact.emails);
    push_text_properties(&mut lines, names::TITLE, &contact.titles);
    push_text_properties(&mut lines, names::ROLE, &contact.roles);

    for org in &contact.organizations {
        if org.is_empty() {
            tracing::trace!(property = names::ORG, "Skipping empty property");
            continue;
        }
        lines.push(organization_line(org));
    }

    push_text_properties(&mut lines, names::NOTE, &contact.notes);
    push_text_properties(&mut lines, names::URL, &contact.urls);

    if let Some(line) = contact
        .revision
        .as_ref()
        .and_then(|rev| text_property_line(names::REV, rev))
    {
        lines.push(line);
    }
    if let Some(line) = contact
        .uid
        .as_ref()
        .and_then(|uid| text_property_line(names::UID, uid))
    {
        lines.push(line);
    }

    lines.push(END_LINE.to_string());

    tracing::trace!(count = lines.len(), "Formatted content lines");

    Ok(lines.join(CRLF))
}

/// Builds the FN line, synthesizing the value from the name components
/// when no full name is given.
fn full_name_line(name: &StructuredName) -> RfcResult<String> {
    if let Some(full) = name.full_name() {
        return Ok(content_line(names::FN, &name.params, &escape_text(full)));
    }

    let display = name.display_name();
    if display.is_empty() {
        return Err(RfcError::InvalidRecord(
            "contact name is empty but FN is mandatory".to_string(),
        ));
    }

    Ok(content_line(names::FN, &Params::new(), &escape_text(&display)))
}

/// Builds the N line, or `None` when every component is empty.
fn name_components_line(name: &StructuredName) -> Option<String> {
    if !name.has_components() {
        return None;
    }

    // family;given;additional;prefixes;suffixes
    let value = [
        &name.family,
        &name.given,
        &name.additional,
        &name.prefixes,
        &name.suffixes,
    ]
    .map(|list| escape_component(list))
    .join(";");

    Some(content_line(names::N, &Params::new(), &value))
}

fn address_line(address: &Address) -> String {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    let mut value = String::from(";;");
    let components = address
        .components()
        .map(|c| c.map(escape_text).unwrap_or_default());
    value.push_str(&components.join(";"));

    content_line(names::ADR, &address.params, &value)
}

fn organization_line(org: &MultiTextProperty) -> String {
    let value = org
        .values
        .iter()
        .map(|v| escape_text(v))
        .collect::<Vec<_>>()
        .join(";");

    content_line(names::ORG, &org.params, &value)
}

fn push_text_properties(lines: &mut Vec<String>, name: &str, props: &[TextProperty]) {
    for prop in props {
        match text_property_line(name, prop) {
            Some(line) => lines.push(line),
            None => tracing::trace!(property = name, "Skipping empty property"),
        }
    }
}

fn text_property_line(name: &str, prop: &TextProperty) -> Option<String> {
    let text = prop.text()?;
    Some(content_line(name, &prop.params, &escape_text(text)))
}

/// Joins a property name, its parameters and an already escaped value.
fn content_line(name: &str, params: &Params, value: &str) -> String {
    let mut line = String::from(name);
    serialize_params(params, &mut line);
    line.push(':');
    line.push_str(value);
    line
}

fn serialize_params(params: &Params, output: &mut String) {
    for key in ParamKey::ALL {
        let Some(value) = params.get(key).filter(|v| !v.is_empty()) else {
            continue;
        };

        output.push(';');
        output.push_str(key.tag());
        output.push('=');
        output.push_str(&escape_param_value(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(full: &str) -> Contact {
        Contact::with_name(StructuredName {
            full: vec![full.to_string()],
            ..StructuredName::default()
        })
    }

    #[test]
    fn format_minimal_vcard() {
        let output = format(&named("John K. Doe")).expect("contact has a name");
        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John K. Doe\r\nEND:VCARD"
        );
    }

    #[test]
    fn format_legacy_version() {
        let output =
            format_with_version(&named("John"), VCardVersion::V3).expect("contact has a name");
        assert!(output.contains("\r\nVERSION:3.0\r\n"));
        assert!(!output.ends_with(CRLF));
    }

    #[test]
    fn empty_name_is_invalid() {
        let err = format(&Contact::new()).expect_err("empty name must be rejected");
        assert!(matches!(err, RfcError::InvalidRecord(_)));
    }

    #[test]
    fn blank_name_values_are_invalid() {
        let contact = Contact::with_name(StructuredName {
            full: vec![String::new()],
            family: vec![String::new()],
            ..StructuredName::default()
        });
        assert!(format(&contact).is_err());
    }

    #[test]
    fn synthesized_fn_has_no_params() {
        let mut name = StructuredName::simple("Doe", "John");
        name.params = Params::language("en");
        let output = format(&Contact::with_name(name)).expect("contact has a name");
        assert!(output.contains("\r\nFN:John Doe\r\n"));
        assert!(output.contains("\r\nN:Doe;John;;;\r\n"));
    }

    #[test]
    fn full_name_carries_params() {
        let mut contact = named("Jane");
        contact.name.params = Params::language("en");
        let output = format(&contact).expect("contact has a name");
        assert!(output.contains("\r\nFN;LANGUAGE=en:Jane\r\n"));
    }

    #[test]
    fn full_name_is_escaped() {
        let output = format(&named("Doe, John; Jr.")).expect("contact has a name");
        assert!(output.contains("\r\nFN:Doe\\, John\\; Jr.\r\n"));
    }

    #[test]
    fn name_components_escape_each_value() {
        let contact = Contact::with_name(StructuredName {
            full: vec!["X".into()],
            family: vec!["O'Neil, Sr".into(), "Smith".into()],
            ..StructuredName::default()
        });
        let output = format(&contact).expect("contact has a name");
        assert!(output.contains("\r\nN:O'Neil\\, Sr,Smith;;;;\r\n"));
    }

    #[test]
    fn params_follow_fixed_key_order() {
        let params = Params::new()
            .with(ParamKey::Encoding, "b")
            .with(ParamKey::Type, "work")
            .with(ParamKey::Timezone, "-0500")
            .with(ParamKey::Label, "Office");
        let mut line = String::new();
        serialize_params(&params, &mut line);
        assert_eq!(line, ";LABEL=Office;TYPE=work;TZ=-0500;ENCODING=b");
    }

    #[test]
    fn empty_params_are_skipped() {
        let params = Params::new()
            .with(ParamKey::Type, "")
            .with(ParamKey::Pref, "1");
        let mut line = String::new();
        serialize_params(&params, &mut line);
        assert_eq!(line, ";PREF=1");
    }

    #[test]
    fn organization_values_are_semicolon_joined() {
        let org = MultiTextProperty::organization(
            "Smithsonian, Inc.",
            ["North America"],
            Params::new(),
        );
        assert_eq!(
            organization_line(&org),
            "ORG:Smithsonian\\, Inc.;North America"
        );
    }

    #[test]
    fn address_placeholders() {
        let address = Address {
            street: Some("otherStreet".into()),
            region: Some("otherRegion".into()),
            params: Params::type_param("HOME"),
            ..Address::default()
        };
        assert_eq!(
            address_line(&address),
            "ADR;TYPE=HOME:;;otherStreet;;otherRegion;;"
        );
    }

    #[test]
    fn revision_and_uid_come_last() {
        let mut contact = named("John");
        contact.uid = Some(TextProperty::new("urn:uuid:1"));
        contact.revision = Some(TextProperty::new("1"));
        contact.urls.push(TextProperty::new("www.example.com"));

        let output = format(&contact).expect("contact has a name");
        assert!(output.ends_with("URL:www.example.com\r\nREV:1\r\nUID:urn:uuid:1\r\nEND:VCARD"));
    }

    #[test]
    fn empty_revision_and_uid_are_skipped() {
        let mut contact = named("John");
        contact.uid = Some(TextProperty::new(""));
        contact.revision = Some(TextProperty::default());

        let output = format(&contact).expect("contact has a name");
        assert!(!output.contains("REV"));
        assert!(!output.contains("UID"));
    }
}
