use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::AccessError;
use crate::fetcher::NotFoundSubject;
use crate::normalize::{normalize_proceeding, DocumentPolicy, NormalizeOptions};
use crate::provider::LawyerProceedingsPage;
use crate::query::build_query;
use crate::Proceeding;

use super::{Host, LawyerProceedingsParams, UseCase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawyerProceedingsPayload {
    #[serde(rename = "advogadoEncontrado")]
    pub lawyer: Option<Value>,
    #[serde(rename = "processos")]
    pub proceedings: Vec<Proceeding>,
    /// Items on this page, not the provider-wide total.
    #[serde(rename = "totalProcessos")]
    pub total: usize,
    pub links: Option<Value>,
    pub paginator: Option<Value>,
}

/// List the proceedings of an OAB registration and report them.
pub async fn run(host: &Host, params: &LawyerProceedingsParams) {
    let outcome = execute(host, params).await;
    host.finish(UseCase::LawyerProceedings, outcome);
}

pub async fn execute(
    host: &Host,
    params: &LawyerProceedingsParams,
) -> Result<LawyerProceedingsPayload, AccessError> {
    let query = params.validate()?;
    let config = host.provider_config()?;
    let url = format!("{}/advogado/processos?{}", config.base_url(), build_query(&query));

    let page: LawyerProceedingsPage = host
        .fetcher()
        .get(&url, config.token(), NotFoundSubject::Lawyer)
        .await?;
    let options = NormalizeOptions::new(DocumentPolicy::PersonOrCompany);
    let proceedings: Vec<Proceeding> = page
        .items
        .iter()
        .map(|item| normalize_proceeding(item, &options))
        .collect();
    info!(oab_state = query.state, proceedings = proceedings.len(), "lawyer listing normalized");

    Ok(LawyerProceedingsPayload {
        lawyer: page.lawyer,
        total: proceedings.len(),
        proceedings,
        links: page.links,
        paginator: page.paginator,
    })
}
