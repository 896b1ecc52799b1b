//! Audit records written through `tracing`

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use intercall_core::{AuditRecord, AuditSink, CallStatus};
use intercall_infra::TracingAuditSink;
use tracing::Level;
use uuid::Uuid;

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn record(status: CallStatus) -> AuditRecord {
    AuditRecord {
        request_id: Uuid::new_v4(),
        recorded_at: Utc::now(),
        url: "https://soap.intercall.example/ownerAPI".into(),
        operation: "Owner::disable",
        status,
        request: "<stop-activity-owner-request/>".into(),
        response: "<status>disabled</status>".into(),
    }
}

fn capture(max_level: Level, f: impl FnOnce()) -> String {
    let writer = CaptureWriter::default();
    let make_writer = writer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_writer(move || make_writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

#[test]
fn success_is_logged_at_debug_under_conference_target() {
    let output = capture(Level::DEBUG, || TracingAuditSink::new().record(&record(CallStatus::Success)));

    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("conference"), "{output}");
    assert!(output.contains("operation=\"Owner::disable\""), "{output}");
    assert!(output.contains("status=SUCCESS"), "{output}");
    assert!(output.contains("url=https://soap.intercall.example/ownerAPI"), "{output}");
}

#[test]
fn failure_is_logged_at_error() {
    let output = capture(Level::ERROR, || TracingAuditSink::new().record(&record(CallStatus::Error)));

    assert!(output.contains("ERROR"), "{output}");
    assert!(output.contains("status=ERROR"), "{output}");
    assert!(output.contains("<stop-activity-owner-request/>"), "{output}");
}

#[test]
fn success_is_hidden_above_debug() {
    let output = capture(Level::INFO, || TracingAuditSink::new().record(&record(CallStatus::Success)));
    assert!(output.is_empty(), "{output}");
}
