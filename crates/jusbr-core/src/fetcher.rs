//! Single-attempt authenticated GET against the provider API.
//!
//! The fetcher never retries. Every non-success status is mapped to a
//! terminal [`AccessError`]; the caller decides how to report it.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AccessError;
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse};

/// The provider rejects requests without a browser-looking user agent.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// What a 404 refers to; the message differs per lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundSubject {
    Proceeding,
    Lawyer,
}

impl NotFoundSubject {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Proceeding => "Processo não encontrado",
            Self::Lawyer => "Advogado não encontrado",
        }
    }
}

#[derive(Clone)]
pub struct Fetcher {
    http_client: Arc<dyn HttpClient>,
}

impl Fetcher {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Issue one GET and decode the JSON body into `T`.
    pub async fn get<T>(
        &self,
        url: &str,
        token: &str,
        subject: NotFoundSubject,
    ) -> Result<T, AccessError>
    where
        T: DeserializeOwned,
    {
        let request = build_request(url, token);
        debug!(url = %url, "requesting provider");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| AccessError::transport(error.message()))?;

        debug!(url = %url, status = response.status, "provider responded");
        classify(&response, subject)?;

        serde_json::from_str(&response.body)
            .map_err(|error| AccessError::decode(format!("resposta inválida da API: {error}")))
    }
}

fn build_request(url: &str, token: &str) -> HttpRequest {
    HttpRequest::get(url)
        .with_header("accept", "application/json")
        .with_auth(&HttpAuth::BearerToken(token.to_owned()))
        .with_header("x-requested-with", "XMLHttpRequest")
        .with_header("user-agent", BROWSER_USER_AGENT)
}

fn classify(response: &HttpResponse, subject: NotFoundSubject) -> Result<(), AccessError> {
    if response.is_success() {
        return Ok(());
    }

    Err(match response.status {
        401 => AccessError::unauthorized(),
        402 => AccessError::insufficient_credit(),
        404 => AccessError::not_found(subject.message()),
        status => AccessError::http_status(status),
    })
}
