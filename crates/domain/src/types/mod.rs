//! Domain types and models
//!
//! Typed views over classified vendor responses.

pub mod dial_in;
pub mod owner;
pub mod phone_number;

pub use dial_in::{DialInCategory, DialInNumber, DialInNumbers};
pub use owner::{
    ActivityAction, ActivityOptions, Owner, OwnerField, OwnerFields, OwnerStatus, OWNER_FIELDS,
    SNAPSHOT_FIELDS,
};
pub use phone_number::{NumberType, PhoneNumber};
