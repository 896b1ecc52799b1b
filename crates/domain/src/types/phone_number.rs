//! Dial-in phone numbers provisioned for an owner

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Vendor number product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberType {
    /// Domestic reservationless-plus number
    #[serde(rename = "RESLESSPLUS")]
    ResLessPlus,
    /// International reservationless-plus number
    #[serde(rename = "RESLESSPLUS_INTL", alias = "RESLESSPLUS-INTL")]
    ResLessPlusIntl,
}

impl_domain_status_conversions!(NumberType {
    ResLessPlus => "RESLESSPLUS",
    ResLessPlusIntl => "RESLESSPLUS_INTL" | "RESLESSPLUS-INTL",
});

/// A dial-in number belonging to an owner.
///
/// Identity is `(owner_number, number)`. The owner number is a
/// back-reference only; the owner record is not owned by the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
    pub number_type: NumberType,
    /// `number-type` exactly as the vendor spelled it
    pub type_literal: String,
    /// Participant passcode, trailing padding removed
    pub conference_code: Option<String>,
    /// Leader PIN, trailing padding removed
    pub leader_pin: Option<String>,
    pub owner_number: String,
}

impl PhoneNumber {
    pub fn new(
        number: impl Into<String>,
        number_type: NumberType,
        owner_number: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            number_type,
            type_literal: number_type.to_string(),
            conference_code: None,
            leader_pin: None,
            owner_number: owner_number.into(),
        }
    }

    /// Keep the vendor's own spelling of the number type.
    pub fn with_type_literal(mut self, literal: impl Into<String>) -> Self {
        self.type_literal = literal.into();
        self
    }

    /// Attach codes as returned by the vendor, which pads them with spaces.
    pub fn with_codes(mut self, conference_code: Option<&str>, leader_pin: Option<&str>) -> Self {
        self.conference_code = conference_code.map(|code| code.trim().to_string());
        self.leader_pin = leader_pin.map(|pin| pin.trim().to_string());
        self
    }
}
