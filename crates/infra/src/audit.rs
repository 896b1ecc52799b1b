//! Audit sink writing records to `tracing`

use intercall_core::{AuditRecord, AuditSink, CallStatus};
use intercall_domain::constants::AUDIT_CATEGORY;
use tracing::{debug, error};

/// Emits each audit record as one event under the `conference` target:
/// `debug` for successful calls, `error` for failed ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl TracingAuditSink {
    pub fn new() -> Self {
        Self
    }
}

impl AuditSink for TracingAuditSink {
    fn record(&self, record: &AuditRecord) {
        match record.status {
            CallStatus::Success => debug!(
                target: AUDIT_CATEGORY,
                request_id = %record.request_id,
                recorded_at = %record.recorded_at,
                url = %record.url,
                operation = record.operation,
                status = %record.status,
                request = %record.request,
                response = %record.response,
                "vendor call succeeded"
            ),
            CallStatus::Error => error!(
                target: AUDIT_CATEGORY,
                request_id = %record.request_id,
                recorded_at = %record.recorded_at,
                url = %record.url,
                operation = record.operation,
                status = %record.status,
                request = %record.request,
                response = %record.response,
                "vendor call failed"
            ),
        }
    }
}
