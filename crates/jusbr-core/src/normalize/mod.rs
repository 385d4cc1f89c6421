//! Mapping from provider payloads to the canonical domain model.
//!
//! | Stage | Entry point |
//! |-------|-------------|
//! | Parties | [`extract_parties`] |
//! | Movements | [`map_movements`] |
//! | Proceedings | [`normalize_proceeding`] |
//!
//! Every field resolves through an ordered chain of optional lookups that
//! ends in a literal default. Empty strings count as absent.

mod movements;
mod parties;
mod proceeding;

pub use movements::{map_movement, map_movements, DEFAULT_MOVEMENT_KIND, NO_DESCRIPTION};
pub use parties::{extract_parties, DocumentPolicy, NAME_NOT_INFORMED};
pub use proceeding::{
    normalize_proceeding, parse_claim_value, NormalizeOptions, DEFAULT_STATUS, NO_CLASS,
    NO_SUBJECT, UNKNOWN_COURT, UNKNOWN_DIVISION,
};

/// First candidate that is present and non-empty.
pub(crate) fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}
