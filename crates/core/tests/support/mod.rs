//! Shared test helpers for `intercall-core` integration tests.
//!
//! A scripted in-memory transport stands in for the vendor endpoint, and the
//! fixtures build response envelopes shaped like the vendor's.

#![allow(dead_code)]

pub mod fixtures;
pub mod transport;
