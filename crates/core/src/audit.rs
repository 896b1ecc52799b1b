//! Audit records emitted for every classified vendor call

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::ports::AuditSink;

/// Outcome label written to the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CallStatus {
    Success,
    Error,
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("SUCCESS"),
            Self::Error => f.write_str("ERROR"),
        }
    }
}

/// One audited call: where it went, what was sent, what came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub request_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub url: String,
    /// `Owner::find` style identifier of the calling operation
    pub operation: &'static str,
    pub status: CallStatus,
    pub request: String,
    pub response: String,
}

/// In-memory sink, used by tests and by embedders that forward records
/// elsewhere.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every record received so far.
    pub fn records(&self) -> Vec<AuditRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<AuditRecord> {
        self.records().pop()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, record: &AuditRecord) {
        let mut guard = match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(record.clone());
    }
}
