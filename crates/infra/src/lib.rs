//! # InterCall Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-based HTTP client and SOAP transport
//! - Configuration loading from environment and files
//! - The `tracing` audit sink
//! - Wiring helpers that assemble an `OwnerService`
//!
//! ## Architecture
//! - Implements traits defined in `intercall-core`
//! - Depends on `intercall-domain` and `intercall-core`
//! - Contains all "impure" code (network and file I/O)

pub mod audit;
pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod soap;

// Re-export commonly used items
pub use audit::TracingAuditSink;
pub use client::{build_owner_service, build_owner_service_with_audit, build_transport};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use soap::HttpSoapTransport;
