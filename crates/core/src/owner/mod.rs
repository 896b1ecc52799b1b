//! Owner and phone-number operations
//!
//! `OwnerService` combines the request builders in [`requests`] with the
//! transport and audit ports. Every public operation performs its remote
//! calls strictly in sequence and returns either a fully decoded result or a
//! single `IntercallError`.

pub mod requests;
mod service;

pub use service::OwnerService;
