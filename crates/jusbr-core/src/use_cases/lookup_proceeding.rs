use serde::Serialize;

use crate::error::{AccessError, ValidationError};
use crate::fetcher::NotFoundSubject;
use crate::normalize::{normalize_proceeding, DocumentPolicy, NormalizeOptions};
use crate::provider::ProceedingItem;
use crate::Proceeding;

use super::{Host, ProceedingLookupParams, UseCase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProceedingLookupPayload {
    #[serde(rename = "processo")]
    pub proceeding: Proceeding,
}

/// Look up one proceeding by CNJ number and report it.
pub async fn run(host: &Host, params: &ProceedingLookupParams) {
    let outcome = execute(host, params).await;
    host.finish(UseCase::LookupProceeding, outcome);
}

pub async fn execute(
    host: &Host,
    params: &ProceedingLookupParams,
) -> Result<ProceedingLookupPayload, AccessError> {
    let case_number = params
        .case_number
        .as_deref()
        .filter(|number| !number.is_empty())
        .ok_or(ValidationError::EmptyCaseNumber)?;

    let config = host.provider_config()?;
    let url = format!(
        "{}/processos/numero_cnj/{}",
        config.base_url(),
        urlencoding::encode(case_number)
    );

    let detail: ProceedingItem = host
        .fetcher()
        .get(&url, config.token(), NotFoundSubject::Proceeding)
        .await?;

    let options =
        NormalizeOptions::new(DocumentPolicy::PersonOnly).with_fallback_number(case_number);
    Ok(ProceedingLookupPayload {
        proceeding: normalize_proceeding(&detail, &options),
    })
}
