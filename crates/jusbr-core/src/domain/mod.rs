//! # Domain Models
//!
//! Canonical records built from provider payloads.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Proceeding`] | Case with cover data, parties and movements |
//! | [`Party`] | Litigant with role and attorneys |
//! | [`Attorney`] | Lawyer with OAB registration |
//! | [`Movement`] | Docket entry with source attribution |
//! | [`UtcDateTime`] | UTC instant |
//! | [`MovementDate`] | Docket date that may be invalid |
//!
//! Records are built once per invocation and never mutated afterwards.

mod models;
mod timestamp;

pub use models::{
    Attorney, Movement, MovementSource, Party, PartyRole, Proceeding, ProceedingStatus,
};
pub use timestamp::{MovementDate, UtcDateTime};
