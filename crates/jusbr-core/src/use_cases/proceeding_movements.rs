use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::{AccessError, ValidationError};
use crate::fetcher::NotFoundSubject;
use crate::normalize::map_movements;
use crate::provider::MovementsPage;
use crate::query::build_query;
use crate::Movement;

use super::{Host, MovementsParams, UseCase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovementsPayload {
    #[serde(rename = "numeroProcesso")]
    pub case_number: String,
    #[serde(rename = "movimentacoes")]
    pub movements: Vec<Movement>,
    #[serde(rename = "totalMovimentacoes")]
    pub total: usize,
    pub links: Option<Value>,
    pub paginator: Option<Value>,
}

/// Fetch one page of docket movements for a proceeding and report it.
pub async fn run(host: &Host, params: &MovementsParams) {
    let outcome = execute(host, params).await;
    host.finish(UseCase::ProceedingMovements, outcome);
}

pub async fn execute(
    host: &Host,
    params: &MovementsParams,
) -> Result<MovementsPayload, AccessError> {
    let case_number = params
        .case_number
        .as_deref()
        .filter(|number| !number.is_empty())
        .ok_or(ValidationError::CaseNumberRequired)?;

    let config = host.provider_config()?;
    let url = format!(
        "{}/processos/numero_cnj/{}/movimentacoes?{}",
        config.base_url(),
        urlencoding::encode(case_number),
        build_query(params)
    );

    let page: MovementsPage = host
        .fetcher()
        .get(&url, config.token(), NotFoundSubject::Proceeding)
        .await?;

    let movements = map_movements(&page.items);
    info!(movements = movements.len(), "movements page normalized");
    Ok(MovementsPayload {
        case_number: case_number.to_owned(),
        total: movements.len(),
        movements,
        links: page.links,
        paginator: page.paginator,
    })
}
