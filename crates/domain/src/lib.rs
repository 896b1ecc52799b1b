//! # InterCall Domain
//!
//! Business domain types and models for the InterCall owner API client.
//!
//! This crate contains:
//! - Owner, phone-number and dial-in data types
//! - Domain error types and Result definitions
//! - Configuration structures (credentials, endpoint, document)
//! - Vendor protocol constants
//!
//! ## Architecture
//! - No dependencies on other InterCall crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
