//! # InterCall Core
//!
//! Request/response mapping for the InterCall owner API - no HTTP code.
//!
//! This crate contains:
//! - Port interfaces for the SOAP transport and the audit log
//! - SOAP envelope construction and XML response decoding
//! - Response classification into success payloads or failures
//! - Owner and phone-number operations built on the ports
//!
//! ## Architecture Principles
//! - Only depends on `intercall-domain`
//! - No network or platform code
//! - All external dependencies via traits

pub mod audit;
pub mod owner;
pub mod ports;
pub mod soap;

pub use audit::{AuditRecord, CallStatus, MemoryAuditSink};
pub use owner::OwnerService;
pub use ports::{AuditSink, SoapRequest, SoapResponse, SoapTransport};
pub use soap::classify::{classify, CallOutcome, NumberPolicy, OwnerRecord, ResponsePayload, ResponseSchema};
pub use soap::envelope::{BodyNode, EnvelopeBuilder, Operation};
pub use soap::xml::XmlElement;
