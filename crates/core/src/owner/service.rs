//! Owner operations service

use std::sync::Arc;

use chrono::Utc;
use intercall_domain::constants::{STATUS_DISABLED, STATUS_ENABLED};
use intercall_domain::{
    ActivityAction, ActivityOptions, Credentials, DialInNumbers, IntercallError, NumberType,
    Owner, OwnerFields, OwnerStatus, PhoneNumber, Result,
};
use tracing::{debug, info, warn};

use super::requests;
use crate::audit::AuditRecord;
use crate::ports::{AuditSink, SoapRequest, SoapTransport};
use crate::soap::classify::{classify, NumberPolicy, OwnerRecord, ResponsePayload, ResponseSchema};
use crate::soap::envelope::{EnvelopeBuilder, Operation};

/// Owner provisioning, number management and dial-in lookup.
pub struct OwnerService {
    transport: Arc<dyn SoapTransport>,
    audit: Arc<dyn AuditSink>,
    envelopes: EnvelopeBuilder,
    default_owner_number: Option<String>,
}

impl OwnerService {
    pub fn new(
        credentials: Credentials,
        transport: Arc<dyn SoapTransport>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        Self {
            transport,
            audit,
            envelopes: EnvelopeBuilder::new(credentials),
            default_owner_number: None,
        }
    }

    /// Owner used by [`Self::dial_in_numbers`] when none is given.
    pub fn with_default_owner_number(mut self, owner_number: Option<String>) -> Self {
        self.default_owner_number = owner_number.filter(|number| !number.trim().is_empty());
        self
    }

    /// Fetch an owner with its fields, status and exactly two numbers.
    pub async fn find_owner(&self, owner_number: &str) -> Result<Owner> {
        let owner_number = non_blank(owner_number, "owner number")?;
        let envelope = self.envelopes.build(Operation::RetrieveOwner, requests::retrieve(owner_number))?;
        let payload = self
            .call(
                "Owner::find",
                Operation::RetrieveOwner,
                envelope,
                ResponseSchema::OwnerService { numbers: NumberPolicy::Required },
            )
            .await?;

        let record = owner_record(payload)?;
        let owner = Owner {
            owner_number: Some(record.owner_number.clone().unwrap_or_else(|| owner_number.to_string())),
            status: record.owner_status(),
            vendor_status: record.status,
            fields: record.fields,
            numbers: record.numbers.unwrap_or_default(),
        };
        info!(owner_number = owner_number, status = %owner.status, "owner retrieved");
        Ok(owner)
    }

    /// Create an owner from allow-listed fields.
    ///
    /// The returned owner carries the vendor-assigned number and the echoed
    /// fields. Its status stays `Unset`: the create response has none.
    pub async fn create_owner(&self, fields: &OwnerFields) -> Result<Owner> {
        let envelope = self.envelopes.build(Operation::AddOwner, requests::add(fields))?;
        let payload = self
            .call(
                "Owner::create",
                Operation::AddOwner,
                envelope,
                ResponseSchema::OwnerService { numbers: NumberPolicy::IfPresent },
            )
            .await?;

        let record = owner_record(payload)?;
        let owner_number = record.owner_number.ok_or_else(|| {
            IntercallError::DataIntegrity("create response did not include an owner-number".into())
        })?;

        let mut echoed = fields.clone();
        echoed.apply(&record.fields);
        info!(owner_number = %owner_number, "owner created");
        Ok(Owner {
            owner_number: Some(owner_number),
            fields: echoed,
            numbers: record.numbers.unwrap_or_default(),
            ..Owner::default()
        })
    }

    /// Create an owner from loosely keyed pairs. Keys outside the allow-list
    /// are dropped with a warning.
    pub async fn create_owner_from_pairs<I, K, V>(&self, pairs: I) -> Result<Owner>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let (fields, dropped) = OwnerFields::select(pairs);
        if !dropped.is_empty() {
            warn!(fields = ?dropped, "ignoring fields outside the owner allow-list");
        }
        self.create_owner(&fields).await
    }

    /// Apply `changes` and resubmit the owner's full snapshot.
    ///
    /// Local fields change only once the vendor accepts the update.
    pub async fn update_owner(&self, owner: &mut Owner, changes: &OwnerFields) -> Result<()> {
        let owner_number = required_owner_number(owner)?.to_string();
        let mut merged = owner.fields.clone();
        merged.apply(changes);

        let envelope =
            self.envelopes.build(Operation::UpdateOwner, requests::update(&owner_number, &merged))?;
        self.call(
            "Owner::update",
            Operation::UpdateOwner,
            envelope,
            ResponseSchema::OwnerService { numbers: NumberPolicy::Ignored },
        )
        .await?;

        owner.fields = merged;
        info!(owner_number = %owner_number, "owner updated");
        Ok(())
    }

    /// Provision a number of `number_type`. The returned pair replaces the
    /// owner's numbers. A status other than `enabled`/`disabled` is kept in
    /// `vendor_status` only.
    pub async fn add_number(&self, owner: &mut Owner, number_type: NumberType) -> Result<()> {
        let owner_number = required_owner_number(owner)?.to_string();
        let envelope = self.envelopes.build(
            Operation::UpdateOwner,
            requests::add_number(&owner_number, &owner.fields, number_type),
        )?;
        let payload = self
            .call(
                "Owner::add_number",
                Operation::UpdateOwner,
                envelope,
                ResponseSchema::OwnerService { numbers: NumberPolicy::Required },
            )
            .await?;

        let record = owner_record(payload)?;
        let status = record.owner_status();
        if status != OwnerStatus::Unset {
            owner.status = status;
        }
        if record.status.is_some() {
            owner.vendor_status = record.status;
        }
        owner.numbers = record.numbers.unwrap_or_default();
        info!(owner_number = %owner_number, number_type = %number_type, "number added");
        Ok(())
    }

    /// Disable the owner. Status becomes `Disabled` only on confirmation.
    pub async fn disable_owner(&self, owner: &mut Owner, options: &ActivityOptions) -> Result<()> {
        self.change_activity(owner, ActivityAction::Disable, options).await
    }

    /// Enable the owner. Status becomes `Enabled` only on confirmation.
    pub async fn enable_owner(&self, owner: &mut Owner, options: &ActivityOptions) -> Result<()> {
        self.change_activity(owner, ActivityAction::Enable, options).await
    }

    async fn change_activity(
        &self,
        owner: &mut Owner,
        action: ActivityAction,
        options: &ActivityOptions,
    ) -> Result<()> {
        let owner_number = required_owner_number(owner)?.to_string();
        let operation = Operation::StopActivityOwner(action);
        let envelope =
            self.envelopes.build(operation, requests::stop_activity(&owner_number, options))?;
        let identifier = match action {
            ActivityAction::Enable => "Owner::enable",
            ActivityAction::Disable => "Owner::disable",
        };

        match self.call(identifier, operation, envelope, ResponseSchema::StopActivity(action)).await? {
            ResponsePayload::ActivityChanged(status) => {
                owner.status = status;
                owner.vendor_status = Some(
                    match action {
                        ActivityAction::Enable => STATUS_ENABLED,
                        ActivityAction::Disable => STATUS_DISABLED,
                    }
                    .to_string(),
                );
                info!(owner_number = %owner_number, status = %status, "owner activity changed");
                Ok(())
            }
            other => Err(unexpected_payload(&other)),
        }
    }

    /// Delete the owner remotely. The local value is left untouched.
    pub async fn delete_owner(&self, owner: &Owner, termination_note: Option<&str>) -> Result<()> {
        let owner_number = required_owner_number(owner)?;
        let envelope = self
            .envelopes
            .build(Operation::DeleteOwner, requests::delete(owner_number, termination_note))?;

        match self.call("Owner::delete", Operation::DeleteOwner, envelope, ResponseSchema::DeleteOwner).await? {
            ResponsePayload::Deleted => {
                info!(owner_number = owner_number, "owner deleted");
                Ok(())
            }
            other => Err(unexpected_payload(&other)),
        }
    }

    /// Remove one number from its owner.
    ///
    /// The owner is fetched again right before the delete so the resubmitted
    /// snapshot is current. A concurrent change between the two calls is not
    /// detected.
    pub async fn delete_number(&self, number: &PhoneNumber) -> Result<()> {
        let owner = self.find_owner(&number.owner_number).await?;
        let envelope = self
            .envelopes
            .build(Operation::UpdateOwner, requests::delete_number(&owner.fields, number))?;
        self.call(
            "PhoneNumber::delete",
            Operation::UpdateOwner,
            envelope,
            ResponseSchema::OwnerService { numbers: NumberPolicy::Ignored },
        )
        .await?;

        info!(owner_number = %number.owner_number, number = %number.number, "number deleted");
        Ok(())
    }

    /// Local and toll-free dial-in numbers for `owner_number`, or for the
    /// configured default owner.
    pub async fn dial_in_numbers(&self, owner_number: Option<&str>) -> Result<DialInNumbers> {
        let owner_number = owner_number
            .filter(|number| !number.trim().is_empty())
            .or(self.default_owner_number.as_deref())
            .ok_or_else(|| {
                IntercallError::InvalidArgument(
                    "no owner number given and no default owner configured".into(),
                )
            })?;

        let envelope = self.envelopes.build_dial_in(owner_number)?;
        match self
            .call(
                "Owner::get_dial_in_numbers",
                Operation::RetrieveDialInNumbers,
                envelope,
                ResponseSchema::DialInNumbers,
            )
            .await?
        {
            ResponsePayload::DialInNumbers(numbers) => {
                debug!(
                    owner_number = owner_number,
                    local = numbers.local.len(),
                    toll_free = numbers.toll_free.len(),
                    "dial-in numbers retrieved"
                );
                Ok(numbers)
            }
            other => Err(unexpected_payload(&other)),
        }
    }

    /// Send one envelope, classify the response and audit the outcome.
    ///
    /// Transport failures propagate unchanged and are not audited.
    async fn call(
        &self,
        identifier: &'static str,
        operation: Operation,
        envelope: String,
        schema: ResponseSchema,
    ) -> Result<ResponsePayload> {
        let request = SoapRequest::new(operation, envelope);
        debug!(
            request_id = %request.request_id,
            operation = identifier,
            soap_action = request.soap_action(),
            "sending request"
        );

        let response = self.transport.send(&request).await?;
        debug!(
            request_id = %request.request_id,
            http_status = response.http_status,
            bytes = response.body.len(),
            "response received"
        );

        let outcome = classify(schema, &response.body);
        let status = outcome.status();
        self.audit.record(&AuditRecord {
            request_id: request.request_id,
            recorded_at: Utc::now(),
            url: response.url,
            operation: identifier,
            status,
            request: request.envelope,
            response: response.body,
        });

        outcome.into_result().map_err(|err| {
            warn!(operation = identifier, error = %err, "vendor call failed");
            err
        })
    }
}

fn non_blank<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntercallError::InvalidArgument(format!("{what} must not be empty")));
    }
    Ok(trimmed)
}

fn required_owner_number(owner: &Owner) -> Result<&str> {
    non_blank(owner.owner_number().unwrap_or_default(), "owner number")
}

fn owner_record(payload: ResponsePayload) -> Result<OwnerRecord> {
    match payload {
        ResponsePayload::Owner(record) => Ok(record),
        other => Err(unexpected_payload(&other)),
    }
}

fn unexpected_payload(payload: &ResponsePayload) -> IntercallError {
    IntercallError::Internal(format!("unexpected response payload: {payload:?}"))
}
