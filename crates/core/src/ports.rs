//! Port interfaces implemented by the infrastructure layer

use async_trait::async_trait;
use intercall_domain::Result;
use uuid::Uuid;

use crate::audit::AuditRecord;
use crate::soap::envelope::Operation;

/// A fully rendered SOAP request ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    pub request_id: Uuid,
    pub operation: Operation,
    /// Rendered XML envelope
    pub envelope: String,
}

impl SoapRequest {
    pub fn new(operation: Operation, envelope: String) -> Self {
        Self { request_id: Uuid::new_v4(), operation, envelope }
    }

    /// Value for the `SOAPAction` header.
    pub fn soap_action(&self) -> &'static str {
        self.operation.soap_action()
    }
}

/// Raw response as received from the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapResponse {
    /// URL the request was posted to
    pub url: String,
    pub http_status: u16,
    pub body: String,
}

/// Sends envelopes to the vendor endpoint.
///
/// Implementations return `IntercallError::Transport` for anything that
/// prevents a SOAP body from coming back. They must not retry: some vendor
/// operations mutate state even when they report an error.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    async fn send(&self, request: &SoapRequest) -> Result<SoapResponse>;
}

/// Receives one record per classified call.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: &AuditRecord);
}
