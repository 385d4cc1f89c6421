use std::collections::HashSet;

use crate::provider::{AttorneyEntry, InvolvedEntry, ProceedingItem};
use crate::{Attorney, Party, PartyRole};

use super::first_present;

pub const NAME_NOT_INFORMED: &str = "Nome não informado";

const EXCLUDED_POLARITY: &str = "NENHUM";
const EXCLUDED_KINDS: [&str; 2] = ["JUIZ", "RELATOR"];

/// Which taxpayer ids may identify a party.
///
/// Attorneys always use the person id only, whatever the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentPolicy {
    /// CPF only (single-proceeding lookup).
    #[default]
    PersonOnly,
    /// CPF, then CNPJ (lawyer search listings).
    PersonOrCompany,
}

/// Flatten every source's participants into deduplicated parties.
///
/// Identity is `(name, role)`; the first occurrence wins together with its
/// attorneys. Output follows source order, then entry order.
pub fn extract_parties(item: &ProceedingItem, policy: DocumentPolicy) -> Vec<Party> {
    let mut seen: HashSet<(String, PartyRole)> = HashSet::new();
    let mut parties = Vec::new();

    for entry in item.sources.iter().flat_map(|source| source.involved.iter()) {
        let Some(role) = party_role(entry) else {
            continue;
        };

        let party = build_party(entry, role, policy);
        if seen.insert((party.name.clone(), party.role)) {
            parties.push(party);
        }
    }

    parties
}

/// `None` for entries that are not parties (judges, rapporteurs, neutral polarity).
fn party_role(entry: &InvolvedEntry) -> Option<PartyRole> {
    let polarity = first_present([entry.polarity.as_deref()])?;
    if polarity == EXCLUDED_POLARITY {
        return None;
    }
    if entry
        .kind
        .as_deref()
        .is_some_and(|kind| EXCLUDED_KINDS.contains(&kind))
    {
        return None;
    }

    Some(PartyRole::from_polarity(polarity))
}

fn build_party(entry: &InvolvedEntry, role: PartyRole, policy: DocumentPolicy) -> Party {
    let company = match policy {
        DocumentPolicy::PersonOnly => None,
        DocumentPolicy::PersonOrCompany => entry.cnpj.as_deref(),
    };

    Party {
        role,
        name: display_name(entry.name.as_deref(), entry.normalized_name.as_deref()),
        document: first_present([entry.cpf.as_deref(), company])
            .unwrap_or_default()
            .to_owned(),
        attorneys: entry.attorneys.iter().map(build_attorney).collect(),
    }
}

fn build_attorney(entry: &AttorneyEntry) -> Attorney {
    let registration = entry
        .registrations
        .first()
        .and_then(|oab| {
            let number = first_present([oab.number.as_deref()])?;
            Some(format!("{number}/{}", oab.state.as_deref().unwrap_or_default()))
        })
        .unwrap_or_default();

    Attorney {
        name: display_name(entry.name.as_deref(), entry.normalized_name.as_deref()),
        registration,
        document: first_present([entry.cpf.as_deref()])
            .unwrap_or_default()
            .to_owned(),
    }
}

fn display_name(name: Option<&str>, normalized: Option<&str>) -> String {
    first_present([name, normalized])
        .unwrap_or(NAME_NOT_INFORMED)
        .to_owned()
}
