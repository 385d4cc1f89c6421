//! Escavador API v2 payload shapes.
//!
//! Every field is optional; fallback decisions live in [`crate::normalize`].

pub mod de;
mod payload;

pub use payload::{
    AttorneyEntry, ClaimValue, Cover, InvolvedEntry, LawyerProceedingsPage, MovementItem,
    MovementSourceItem, MovementsPage, OabEntry, OriginState, OriginUnit, ProceedingItem,
    SourceRecord,
};
