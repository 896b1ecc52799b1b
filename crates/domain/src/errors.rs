//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the InterCall client
///
/// Every remote call ends in exactly one success payload or one of these
/// variants. `Transport` is never produced by response classification; it is
/// passed through from the HTTP layer unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum IntercallError {
    /// Network or HTTP failure before a SOAP body could be classified
    #[error("Transport error: {0}")]
    Transport(String),

    /// The vendor answered with its `error` status
    #[error("Vendor error: {0}")]
    Vendor(String),

    /// The vendor answered successfully but the payload is unusable
    /// (wrong number count, missing owner block, unknown number type)
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// The status field held a value outside the operation's vocabulary
    #[error("Unrecognized status: {0}")]
    UnrecognizedStatus(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// SOAP Fault returned in place of an operation response
    #[error("SOAP fault: {0}")]
    Fault(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntercallError {
    /// Returns true when the vendor produced a response that was classified
    /// as a failure, as opposed to local or transport problems.
    pub fn is_classified_failure(&self) -> bool {
        matches!(
            self,
            Self::Vendor(_) | Self::DataIntegrity(_) | Self::UnrecognizedStatus(_) | Self::Fault(_)
        )
    }
}

/// Result type alias for InterCall operations
pub type Result<T> = std::result::Result<T, IntercallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_and_message() {
        let err = IntercallError::Vendor("Owner::find returned status \"error\"".into());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "Vendor");
        assert_eq!(json["message"], "Owner::find returned status \"error\"");
    }

    #[test]
    fn classified_failures_exclude_transport_and_arguments() {
        assert!(IntercallError::Vendor("x".into()).is_classified_failure());
        assert!(IntercallError::DataIntegrity("x".into()).is_classified_failure());
        assert!(IntercallError::UnrecognizedStatus("x".into()).is_classified_failure());
        assert!(IntercallError::Fault("x".into()).is_classified_failure());
        assert!(!IntercallError::Transport("x".into()).is_classified_failure());
        assert!(!IntercallError::InvalidArgument("x".into()).is_classified_failure());
    }

    #[test]
    fn display_includes_category() {
        let err = IntercallError::DataIntegrity("expected 2 numbers, got 1".into());
        assert_eq!(err.to_string(), "Data integrity error: expected 2 numbers, got 1");
    }
}
