//! Response classification
//!
//! `classify` is total: any input string, including malformed XML, maps to
//! exactly one `CallOutcome`. Each operation decodes its own response element
//! and compares the vendor status against that operation's vocabulary.

use std::collections::BTreeMap;

use intercall_domain::constants::{
    DELETE_OWNER_RESPONSE, FIRST_NUMBER_SECTION, NUMBERS_PER_OWNER, OWNER_SERVICE_RESPONSE,
    RETRIEVE_DIALIN_NUMBERS_RESPONSE, STATUS_DELETE_SUCCESSFUL, STATUS_DISABLED,
    STATUS_ENABLED, STATUS_ERROR, STOP_ACTIVITY_OWNER_RESPONSE,
};
use intercall_domain::{
    ActivityAction, DialInNumber, DialInNumbers, IntercallError, NumberType, OwnerField,
    OwnerFields, OwnerStatus, PhoneNumber, Result,
};
use tracing::warn;

use crate::audit::CallStatus;
use crate::soap::xml::{snake_case, XmlElement};

/// How number records in an owner-service response are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPolicy {
    /// Exactly two records must be present.
    Required,
    /// Zero records are accepted; any other count must be exactly two.
    IfPresent,
    /// Number records are not decoded.
    Ignored,
}

/// Per-operation response layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSchema {
    OwnerService { numbers: NumberPolicy },
    StopActivity(ActivityAction),
    DeleteOwner,
    DialInNumbers,
}

impl ResponseSchema {
    pub fn response_element(self) -> &'static str {
        match self {
            Self::OwnerService { .. } => OWNER_SERVICE_RESPONSE,
            Self::StopActivity(_) => STOP_ACTIVITY_OWNER_RESPONSE,
            Self::DeleteOwner => DELETE_OWNER_RESPONSE,
            Self::DialInNumbers => RETRIEVE_DIALIN_NUMBERS_RESPONSE,
        }
    }
}

/// Owner block of a successful owner-service response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerRecord {
    /// Raw vendor status, when one was returned
    pub status: Option<String>,
    pub owner_number: Option<String>,
    pub fields: OwnerFields,
    /// `None` when numbers were not decoded or none were returned
    pub numbers: Option<Vec<PhoneNumber>>,
}

impl OwnerRecord {
    /// Parsed status. Values outside `enabled`/`disabled` read as `Unset`.
    pub fn owner_status(&self) -> OwnerStatus {
        match self.status.as_deref() {
            Some(STATUS_ENABLED) => OwnerStatus::Enabled,
            Some(STATUS_DISABLED) => OwnerStatus::Disabled,
            _ => OwnerStatus::Unset,
        }
    }
}

/// Decoded payload of a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePayload {
    Owner(OwnerRecord),
    ActivityChanged(OwnerStatus),
    Deleted,
    DialInNumbers(DialInNumbers),
}

/// Result of classifying one raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Success(ResponsePayload),
    Failure(IntercallError),
}

impl CallOutcome {
    /// Audit status for this outcome.
    pub fn status(&self) -> CallStatus {
        match self {
            Self::Success(_) => CallStatus::Success,
            Self::Failure(_) => CallStatus::Error,
        }
    }

    pub fn into_result(self) -> Result<ResponsePayload> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(err) => Err(err),
        }
    }
}

impl From<Result<ResponsePayload>> for CallOutcome {
    fn from(result: Result<ResponsePayload>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err) => Self::Failure(err),
        }
    }
}

/// Classify a raw SOAP response against the layout of `schema`.
pub fn classify(schema: ResponseSchema, raw: &str) -> CallOutcome {
    decode(schema, raw).into()
}

fn decode(schema: ResponseSchema, raw: &str) -> Result<ResponsePayload> {
    let root = XmlElement::parse(raw)?;
    let body = if root.is("Envelope") {
        root.child("Body")
            .ok_or_else(|| IntercallError::Xml("SOAP envelope has no Body".into()))?
    } else {
        &root
    };

    if let Some(fault) = body.child("Fault") {
        return Err(fault_error(fault));
    }

    let element = schema.response_element();
    let response = body.child(element).ok_or_else(|| {
        IntercallError::DataIntegrity(format!("response does not contain <{element}>"))
    })?;

    match schema {
        ResponseSchema::OwnerService { numbers } => decode_owner_service(response, numbers),
        ResponseSchema::StopActivity(action) => decode_stop_activity(response, action),
        ResponseSchema::DeleteOwner => decode_delete(response),
        ResponseSchema::DialInNumbers => decode_dial_in(response),
    }
}

fn fault_error(fault: &XmlElement) -> IntercallError {
    let code = fault.child_text("faultcode").unwrap_or("unknown");
    let message = fault.child_text("faultstring").unwrap_or("no fault string");
    IntercallError::Fault(format!("{code}: {message}"))
}

fn vendor_error(response: &XmlElement) -> IntercallError {
    let detail = ["message", "error-message", "description"]
        .into_iter()
        .find_map(|name| response.child_text(name))
        .filter(|text| !text.is_empty());
    match detail {
        Some(detail) => IntercallError::Vendor(detail.to_string()),
        None => IntercallError::Vendor(format!("vendor returned status \"{STATUS_ERROR}\"")),
    }
}

fn decode_owner_service(response: &XmlElement, policy: NumberPolicy) -> Result<ResponsePayload> {
    let status = response.child_text("status");
    if status == Some(STATUS_ERROR) {
        return Err(vendor_error(response));
    }

    let mut record = OwnerRecord { status: status.map(str::to_string), ..OwnerRecord::default() };

    let owner = response.child("owner");
    if let Some(owner) = owner {
        record.owner_number =
            owner.child_text("owner-number").filter(|n| !n.is_empty()).map(str::to_string);
        if let Some(info) = owner.child("owner-info") {
            record.fields = decode_fields(info);
        }
    }

    if policy == NumberPolicy::Ignored {
        return Ok(ResponsePayload::Owner(record));
    }

    let entries: Vec<&XmlElement> =
        owner.map(|owner| owner.children_named("numbers").collect()).unwrap_or_default();
    if entries.is_empty() && policy == NumberPolicy::IfPresent {
        return Ok(ResponsePayload::Owner(record));
    }
    if entries.len() != NUMBERS_PER_OWNER {
        return Err(IntercallError::DataIntegrity(format!(
            "expected {NUMBERS_PER_OWNER} number records, got {}",
            entries.len()
        )));
    }

    let owner_number = record.owner_number.clone().ok_or_else(|| {
        IntercallError::DataIntegrity("number records returned without an owner-number".into())
    })?;
    let numbers = entries
        .into_iter()
        .map(|entry| decode_number(entry, &owner_number))
        .collect::<Result<Vec<_>>>()?;
    record.numbers = Some(numbers);

    Ok(ResponsePayload::Owner(record))
}

fn decode_fields(info: &XmlElement) -> OwnerFields {
    let mut fields = OwnerFields::new();
    for child in info.children.iter().filter(|child| child.is_leaf()) {
        if let Some(field) = OwnerField::from_key(&child.name) {
            fields.set(field, child.text.clone());
        }
    }
    fields
}

fn decode_number(entry: &XmlElement, owner_number: &str) -> Result<PhoneNumber> {
    let number = entry
        .child_text("number")
        .filter(|number| !number.is_empty())
        .ok_or_else(|| IntercallError::DataIntegrity("number record without a number".into()))?;
    let raw_type = entry.attribute("number-type").ok_or_else(|| {
        IntercallError::DataIntegrity(format!("number {number} has no number-type"))
    })?;
    let number_type: NumberType = raw_type.parse().map_err(|_| {
        IntercallError::DataIntegrity(format!("number {number} has unknown type {raw_type}"))
    })?;

    Ok(PhoneNumber::new(number, number_type, owner_number)
        .with_type_literal(raw_type.trim())
        .with_codes(entry.child_text("conference-code"), entry.child_text("pin")))
}

fn decode_stop_activity(response: &XmlElement, action: ActivityAction) -> Result<ResponsePayload> {
    let status = response.child_text("status");
    let expected = match action {
        ActivityAction::Enable => STATUS_ENABLED,
        ActivityAction::Disable => STATUS_DISABLED,
    };

    match status {
        Some(STATUS_ERROR) => Err(vendor_error(response)),
        Some(status) if status == expected => {
            Ok(ResponsePayload::ActivityChanged(action.confirmed_status()))
        }
        Some(other) => Err(IntercallError::UnrecognizedStatus(format!(
            "{action} request answered with status \"{other}\""
        ))),
        None => Err(IntercallError::UnrecognizedStatus(format!(
            "{action} request answered without a status"
        ))),
    }
}

fn decode_delete(response: &XmlElement) -> Result<ResponsePayload> {
    match response.child_text("status") {
        Some(STATUS_ERROR) => Err(vendor_error(response)),
        Some(STATUS_DELETE_SUCCESSFUL) => Ok(ResponsePayload::Deleted),
        Some(other) => Err(IntercallError::UnrecognizedStatus(format!(
            "delete answered with status \"{other}\""
        ))),
        None => Err(IntercallError::UnrecognizedStatus("delete answered without a status".into())),
    }
}

fn decode_dial_in(response: &XmlElement) -> Result<ResponsePayload> {
    if response.child_text("status") == Some(STATUS_ERROR) {
        return Err(vendor_error(response));
    }

    let mut numbers = DialInNumbers::default();
    let sections = response.children_named("productDialinNumbersInfo").skip(FIRST_NUMBER_SECTION);
    for section in sections {
        for entry in section.children_named("dialinNumberInfo") {
            let record = decode_dial_in_number(entry);
            let label = record.display_label.clone();
            if !numbers.push(record) {
                warn!(display_label = %label, "dropping dial-in number with unknown label");
            }
        }
    }

    Ok(ResponsePayload::DialInNumbers(numbers))
}

fn decode_dial_in_number(entry: &XmlElement) -> DialInNumber {
    let fields: BTreeMap<String, String> = entry
        .children
        .iter()
        .filter(|child| child.is_leaf())
        .map(|child| (snake_case(&child.name), child.text.clone()))
        .collect();
    DialInNumber {
        display_label: entry.child_text("displayLabel").unwrap_or_default().to_string(),
        fields,
    }
}
