//! Use-case orchestrators.
//!
//! Each invocation runs `validate → resolve credentials → request →
//! normalize → report`. Failures from any stage surface as an
//! [`AccessError`] and are converted to a failure [`Report`] exactly once, in
//! [`Host::finish`]. Nothing escapes to the caller as an error.

mod lawyer_proceedings;
mod lookup_proceeding;
mod params;
mod proceeding_movements;

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::{Environment, ProviderConfig};
use crate::error::{AccessError, ValidationError};
use crate::fetcher::Fetcher;
use crate::http_client::HttpClient;
use crate::report::{Report, ResultSink};

pub use lawyer_proceedings::LawyerProceedingsPayload;
pub use lookup_proceeding::ProceedingLookupPayload;
pub use params::{
    parse_params, LawyerProceedingsParams, LawyerProceedingsQuery, MovementsParams, OabKind,
    PageLimit, ProceedingLookupParams, SortOrder, StatusFilter,
};
pub use proceeding_movements::MovementsPayload;

pub mod lookup {
    pub use super::lookup_proceeding::{execute, run};
}

pub mod lawyer {
    pub use super::lawyer_proceedings::{execute, run};
}

pub mod movements {
    pub use super::proceeding_movements::{execute, run};
}

/// Collaborators supplied by the invoking host.
#[derive(Clone)]
pub struct Host {
    env: Arc<dyn Environment>,
    sink: Arc<dyn ResultSink>,
    http_client: Arc<dyn HttpClient>,
    base_url_override: Option<String>,
}

impl Host {
    pub fn new(
        env: Arc<dyn Environment>,
        sink: Arc<dyn ResultSink>,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            env,
            sink,
            http_client,
            base_url_override: None,
        }
    }

    /// Base URL that takes precedence over `ESCAVADOR_BASE_URL`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub(crate) fn provider_config(&self) -> Result<ProviderConfig, AccessError> {
        let config = ProviderConfig::from_env(self.env.as_ref())?;
        Ok(match &self.base_url_override {
            Some(base_url) => config.with_base_url(base_url),
            None => config,
        })
    }

    pub(crate) fn fetcher(&self) -> Fetcher {
        Fetcher::new(Arc::clone(&self.http_client))
    }

    /// Single conversion point from an invocation outcome to a report.
    pub(crate) fn finish<T: Serialize>(&self, use_case: UseCase, outcome: Result<T, AccessError>) {
        let data = outcome.and_then(|payload| {
            serde_json::to_value(payload).map_err(|error| {
                AccessError::decode(format!("falha ao serializar resultado: {error}"))
            })
        });

        let report = match data {
            Ok(data) => {
                info!(use_case = %use_case, "invocation succeeded");
                Report::success(data)
            }
            Err(error) => {
                warn!(
                    use_case = %use_case,
                    code = error.code(),
                    local = error.is_local(),
                    error = error.message(),
                    "invocation failed"
                );
                Report::failure(error.message())
            }
        };

        self.sink.report(report);
    }
}

/// Host-visible use-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    LookupProceeding,
    LawyerProceedings,
    ProceedingMovements,
}

impl UseCase {
    pub const ALL: [Self; 3] = [
        Self::LookupProceeding,
        Self::LawyerProceedings,
        Self::ProceedingMovements,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LookupProceeding => "buscarProcesso",
            Self::LawyerProceedings => "buscarAdvogado",
            Self::ProceedingMovements => "buscarMovimentacoes",
        }
    }
}

impl Display for UseCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|use_case| use_case.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ValidationError::InvalidParams {
                reason: format!("caso de uso desconhecido '{value}'"),
            })
    }
}

/// Run a use case from raw host params.
///
/// Malformed params are reported as input-validation failures.
pub async fn dispatch(host: &Host, use_case: UseCase, params: Value) {
    match use_case {
        UseCase::LookupProceeding => match parse_params(params) {
            Ok(params) => lookup::run(host, &params).await,
            Err(error) => host.finish::<Value>(use_case, Err(error.into())),
        },
        UseCase::LawyerProceedings => match parse_params(params) {
            Ok(params) => lawyer::run(host, &params).await,
            Err(error) => host.finish::<Value>(use_case, Err(error.into())),
        },
        UseCase::ProceedingMovements => match parse_params(params) {
            Ok(params) => movements::run(host, &params).await,
            Err(error) => host.finish::<Value>(use_case, Err(error.into())),
        },
    }
}
