//! Owning contact record with append/set operations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::VCardVersion;
use super::contact::Contact;
use super::parameter::Params;
use super::property::{MultiTextProperty, TextProperty};
use super::structured::Address;
use crate::error::RfcResult;
use crate::rfc::vcard::build::format_with_version;

/// A contact under construction.
///
/// The record owns its data outright. Input snapshots are copied on the way
/// in, so later changes on either side are never observed by the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    contact: Contact,
}

impl ContactRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record from a copy of `snapshot`.
    #[must_use]
    pub fn from_snapshot(snapshot: &Contact) -> Self {
        Self {
            contact: snapshot.clone(),
        }
    }

    /// Returns the current state for formatting.
    #[must_use]
    pub fn snapshot(&self) -> &Contact {
        &self.contact
    }

    /// Formats the record as a vCard document.
    ///
    /// ## Errors
    /// Returns [`crate::error::RfcError::InvalidRecord`] if the name is empty.
    pub fn to_vcard(&self, version: VCardVersion) -> RfcResult<String> {
        format_with_version(&self.contact, version)
    }

    // --- Name ---

    /// Appends a formatted name. Only the first one is written as FN.
    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.contact.name.full.push(full_name.into());
    }

    pub fn add_first_name(&mut self, first_name: impl Into<String>) {
        self.contact.name.given.push(first_name.into());
    }

    pub fn add_middle_name(&mut self, middle_name: impl Into<String>) {
        self.contact.name.additional.push(middle_name.into());
    }

    pub fn add_last_name(&mut self, last_name: impl Into<String>) {
        self.contact.name.family.push(last_name.into());
    }

    pub fn add_prefix_name(&mut self, prefix: impl Into<String>) {
        self.contact.name.prefixes.push(prefix.into());
    }

    pub fn add_suffix_name(&mut self, suffix: impl Into<String>) {
        self.contact.name.suffixes.push(suffix.into());
    }

    /// Sets the parameters written on the FN line.
    pub fn set_name_params(&mut self, params: Params) {
        self.contact.name.params = params;
    }

    // --- Repeated properties ---

    pub fn add_nickname(&mut self, nickname: impl Into<String>, params: Params) {
        self.contact
            .nicknames
            .push(TextProperty::with_params(nickname, params));
    }

    /// Appends a photo, given as a URI or inline data.
    pub fn add_photo(&mut self, uri: impl Into<String>, params: Params) {
        self.contact
            .photos
            .push(TextProperty::with_params(uri, params));
    }

    /// Appends an address. Empty components may be passed as `None`.
    pub fn add_address(
        &mut self,
        street: Option<&str>,
        locality: Option<&str>,
        region: Option<&str>,
        post_code: Option<&str>,
        country: Option<&str>,
        params: Params,
    ) {
        self.contact.addresses.push(Address {
            street: street.map(str::to_string),
            locality: locality.map(str::to_string),
            region: region.map(str::to_string),
            post_code: post_code.map(str::to_string),
            country: country.map(str::to_string),
            params,
        });
    }

    pub fn add_phone(&mut self, number: impl Into<String>, params: Params) {
        self.contact
            .phones
            .push(TextProperty::with_params(number, params));
    }

    pub fn add_email(&mut self, email: impl Into<String>, params: Params) {
        self.contact
            .emails
            .push(TextProperty::with_params(email, params));
    }

    pub fn add_title(&mut self, title: impl Into<String>, params: Params) {
        self.contact
            .titles
            .push(TextProperty::with_params(title, params));
    }

    pub fn add_role(&mut self, role: impl Into<String>, params: Params) {
        self.contact
            .roles
            .push(TextProperty::with_params(role, params));
    }

    /// Appends an organization; `units` follow the name in the ORG value.
    pub fn add_organization<I, S>(&mut self, organization: impl Into<String>, units: I, params: Params)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contact
            .organizations
            .push(MultiTextProperty::organization(organization, units, params));
    }

    pub fn add_note(&mut self, note: impl Into<String>, params: Params) {
        self.contact
            .notes
            .push(TextProperty::with_params(note, params));
    }

    pub fn add_url(&mut self, url: impl Into<String>, params: Params) {
        self.contact.urls.push(TextProperty::with_params(url, params));
    }

    // --- Single properties ---

    /// Sets the revision, replacing any previous value.
    pub fn set_revision(&mut self, revision: impl Into<String>, params: Params) {
        self.contact.revision = Some(TextProperty::with_params(revision, params));
    }

    /// Sets the revision to a UTC timestamp (`YYYYMMDDTHHMMSSZ`).
    pub fn set_revision_timestamp(&mut self, at: DateTime<Utc>) {
        self.set_revision(at.format("%Y%m%dT%H%M%SZ").to_string(), Params::new());
    }

    /// Sets the UID, replacing any previous value.
    pub fn set_uid(&mut self, uid: impl Into<String>, params: Params) {
        self.contact.uid = Some(TextProperty::with_params(uid, params));
    }

    /// Sets the UID to a fresh `urn:uuid:` value and returns it.
    pub fn set_random_uid(&mut self) -> String {
        let uid = format!("urn:uuid:{}", Uuid::new_v4());
        self.set_uid(uid.clone(), Params::new());
        uid
    }
}

impl From<Contact> for ContactRecord {
    fn from(contact: Contact) -> Self {
        Self { contact }
    }
}
