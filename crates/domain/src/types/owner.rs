//! Owner record and its field allow-list

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;
use crate::types::phone_number::PhoneNumber;

/// Owner fields the client is allowed to send to the vendor.
///
/// Each field has a snake_case key used by callers and a hyphenated wire name
/// used in the SOAP body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerField {
    FirstName,
    LastName,
    Position,
    Address1,
    Address2,
    Address3,
    City,
    State,
    Country,
    Zip,
    Phone,
    Fax,
    Email,
    PacCode,
    WebPin,
}

/// Complete allow-list, in wire order.
pub const OWNER_FIELDS: [OwnerField; 15] = [
    OwnerField::FirstName,
    OwnerField::LastName,
    OwnerField::Position,
    OwnerField::Address1,
    OwnerField::Address2,
    OwnerField::Address3,
    OwnerField::City,
    OwnerField::State,
    OwnerField::Country,
    OwnerField::Zip,
    OwnerField::Phone,
    OwnerField::Fax,
    OwnerField::Email,
    OwnerField::PacCode,
    OwnerField::WebPin,
];

/// Fields resubmitted as `owner-info` on every owner-level write.
///
/// `pac-code` and `web-pin` are only accepted by `add-owner-request`.
pub const SNAPSHOT_FIELDS: [OwnerField; 13] = [
    OwnerField::FirstName,
    OwnerField::LastName,
    OwnerField::Position,
    OwnerField::Address1,
    OwnerField::Address2,
    OwnerField::Address3,
    OwnerField::City,
    OwnerField::State,
    OwnerField::Country,
    OwnerField::Zip,
    OwnerField::Phone,
    OwnerField::Fax,
    OwnerField::Email,
];

impl OwnerField {
    /// Caller-facing key, e.g. `first_name`.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Position => "position",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::Address3 => "address3",
            Self::City => "city",
            Self::State => "state",
            Self::Country => "country",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Fax => "fax",
            Self::Email => "email",
            Self::PacCode => "pac_code",
            Self::WebPin => "web_pin",
        }
    }

    /// Element name inside `owner-info`, e.g. `first-name`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::PacCode => "pac-code",
            Self::WebPin => "web-pin",
            other => other.key(),
        }
    }

    /// Resolve a caller key or wire name. Hyphens and underscores are
    /// interchangeable; anything outside the allow-list yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().replace('-', "_").to_ascii_lowercase();
        OWNER_FIELDS.into_iter().find(|field| field.key() == normalized)
    }
}

/// Typed owner contact record. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerFields {
    values: BTreeMap<OwnerField, String>,
}

impl OwnerFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep allow-listed pairs and report the keys that were dropped.
    pub fn select<I, K, V>(pairs: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut fields = Self::new();
        let mut dropped = Vec::new();
        for (key, value) in pairs {
            match OwnerField::from_key(key.as_ref()) {
                Some(field) => fields.set(field, value),
                None => dropped.push(key.as_ref().to_string()),
            }
        }
        (fields, dropped)
    }

    /// Builder-style setter.
    pub fn with(mut self, field: OwnerField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: OwnerField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn clear(&mut self, field: OwnerField) {
        self.values.remove(&field);
    }

    pub fn get(&self, field: OwnerField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overwrite local values with every field present in `other`.
    pub fn apply(&mut self, other: &Self) {
        for (field, value) in &other.values {
            self.values.insert(*field, value.clone());
        }
    }

    /// Non-blank allow-listed values in wire order.
    pub fn allow_listed(&self) -> Vec<(OwnerField, &str)> {
        self.non_blank(&OWNER_FIELDS)
    }

    /// Non-blank snapshot values in wire order.
    ///
    /// Blank values are omitted because the vendor rejects empty text nodes
    /// as type errors.
    pub fn snapshot(&self) -> Vec<(OwnerField, &str)> {
        self.non_blank(&SNAPSHOT_FIELDS)
    }

    fn non_blank(&self, order: &[OwnerField]) -> Vec<(OwnerField, &str)> {
        order
            .iter()
            .filter_map(|field| {
                self.get(*field)
                    .filter(|value| !value.trim().is_empty())
                    .map(|value| (*field, value))
            })
            .collect()
    }
}

/// Activity status of an owner as last confirmed by the vendor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OwnerStatus {
    #[default]
    Unset,
    Enabled,
    Disabled,
}

impl_domain_status_conversions!(OwnerStatus {
    Unset => "UNSET",
    Enabled => "ENABLED",
    Disabled => "DISABLED",
});

/// Direction of a `stop-activity-owner-request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Enable,
    Disable,
}

impl_domain_status_conversions!(ActivityAction {
    Enable => "enable",
    Disable => "disable",
});

impl ActivityAction {
    /// Status the vendor reports when this action took effect.
    pub fn confirmed_status(self) -> OwnerStatus {
        match self {
            Self::Enable => OwnerStatus::Enabled,
            Self::Disable => OwnerStatus::Disabled,
        }
    }
}

/// Optional audit details accepted by enable/disable requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityOptions {
    pub reference_number: Option<String>,
    pub callback_url: Option<String>,
    pub client_request: Option<String>,
    pub audit_user: Option<String>,
    pub termination_note: Option<String>,
}

impl ActivityOptions {
    /// Present options as `(element, value)` pairs in request order.
    pub fn elements(&self) -> Vec<(&'static str, &str)> {
        [
            ("reference-number", &self.reference_number),
            ("callback-url", &self.callback_url),
            ("client-request", &self.client_request),
            ("audit-user", &self.audit_user),
            ("terminationNote", &self.termination_note),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

/// Vendor-managed conferencing account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Vendor-assigned identifier, absent until created or found
    pub owner_number: Option<String>,
    pub fields: OwnerFields,
    pub status: OwnerStatus,
    /// Raw status literal from the last owner-service response
    pub vendor_status: Option<String>,
    /// Domestic and international number pair, or empty
    pub numbers: Vec<PhoneNumber>,
}

impl Owner {
    /// Local owner that has not been created remotely yet.
    pub fn new(fields: OwnerFields) -> Self {
        Self { fields, ..Self::default() }
    }

    /// Handle for an existing remote owner without fetching it.
    pub fn with_owner_number(owner_number: impl Into<String>) -> Self {
        Self { owner_number: Some(owner_number.into()), ..Self::default() }
    }

    pub fn owner_number(&self) -> Option<&str> {
        self.owner_number.as_deref()
    }
}
