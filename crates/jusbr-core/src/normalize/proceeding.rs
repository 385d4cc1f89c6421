use crate::provider::{Cover, ProceedingItem};
use crate::{Proceeding, ProceedingStatus, UtcDateTime};

use super::first_present;
use super::parties::{extract_parties, DocumentPolicy};

pub const UNKNOWN_COURT: &str = "Desconhecido";
pub const UNKNOWN_DIVISION: &str = "Desconhecida";
pub const NO_CLASS: &str = "Sem classe";
pub const NO_SUBJECT: &str = "Sem assunto";
pub const DEFAULT_STATUS: &str = "ATIVO";

/// Per-call inputs the payload cannot supply.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Case number used when the payload carries none.
    pub fallback_number: Option<String>,
    pub documents: DocumentPolicy,
    /// Distribution date when no source supplies a usable one.
    pub now: UtcDateTime,
}

impl NormalizeOptions {
    pub fn new(documents: DocumentPolicy) -> Self {
        Self {
            fallback_number: None,
            documents,
            now: UtcDateTime::now(),
        }
    }

    pub fn with_fallback_number(mut self, number: impl Into<String>) -> Self {
        self.fallback_number = Some(number.into());
        self
    }

    pub fn with_now(mut self, now: UtcDateTime) -> Self {
        self.now = now;
        self
    }
}

/// Build the canonical record for a detail or listing item.
///
/// Cover fields come from the first source only; parties come from all of
/// them. Movements are never present on these endpoints.
pub fn normalize_proceeding(item: &ProceedingItem, options: &NormalizeOptions) -> Proceeding {
    let cover = item
        .sources
        .first()
        .and_then(|source| source.cover.as_ref());
    let cover_field = |select: fn(&Cover) -> Option<&str>| cover.and_then(select);

    let unit = item.origin_unit.as_ref();
    let number = first_present([
        item.case_number.as_deref(),
        options.fallback_number.as_deref(),
    ])
    .unwrap_or_default();
    let court = first_present([
        unit.and_then(|unit| unit.court_abbreviation.as_deref()),
        item.origin_state
            .as_ref()
            .and_then(|state| state.abbreviation.as_deref()),
    ])
    .unwrap_or(UNKNOWN_COURT);
    let division =
        first_present([unit.and_then(|unit| unit.name.as_deref())]).unwrap_or(UNKNOWN_DIVISION);

    let distributed_at = [
        cover_field(|cover| cover.distributed_at.as_deref()),
        item.started_at.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find_map(|raw| UtcDateTime::parse(raw).ok())
    .unwrap_or(options.now);

    let claim_value = cover
        .and_then(|cover| cover.claim_value.as_ref())
        .and_then(|value| value.amount.as_deref())
        .map(parse_claim_value)
        .unwrap_or(0.0);

    Proceeding {
        number: number.to_owned(),
        court: court.to_owned(),
        division: division.to_owned(),
        class: first_present([cover_field(|cover| cover.class.as_deref())])
            .unwrap_or(NO_CLASS)
            .to_owned(),
        subject: first_present([cover_field(|cover| cover.subject.as_deref())])
            .unwrap_or(NO_SUBJECT)
            .to_owned(),
        distributed_at,
        claim_value,
        status: ProceedingStatus::parse(
            first_present([cover_field(|cover| cover.situation.as_deref())])
                .unwrap_or(DEFAULT_STATUS),
        ),
        parties: extract_parties(item, options.documents),
        movements: Vec::new(),
    }
}

/// Parse a claim amount, defaulting to zero.
///
/// Tries the whole trimmed text first, then its longest leading decimal
/// prefix (`"1500.00 BRL"` is 1500). Negative or non-finite results are 0.
pub fn parse_claim_value(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let parsed = trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| leading_decimal(trimmed).and_then(|prefix| prefix.parse().ok()));

    match parsed {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

fn leading_decimal(text: &str) -> Option<&str> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (index, ch) in text.char_indices() {
        match ch {
            '+' | '-' if index == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = index + ch.len_utf8();
    }

    seen_digit.then(|| text[..end].trim_end_matches('.'))
}
