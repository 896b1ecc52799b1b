//! SOAP envelope construction, XML decoding and response classification
//!
//! - **Envelope**: `EnvelopeBuilder` renders per-operation request bodies with
//!   the account's `login-info` block merged in
//! - **XML**: `XmlElement` is a namespace-stripped element tree of a response
//! - **Classify**: `classify` maps a raw response to exactly one
//!   `CallOutcome`

pub mod classify;
pub mod envelope;
pub mod xml;
