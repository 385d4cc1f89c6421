//! # jusbr core
//!
//! Access layer and canonical model for Brazilian judicial proceedings,
//! backed by the Escavador API v2.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Token and base URL resolution from the host environment |
//! | [`domain`] | Canonical models (Proceeding, Party, Movement) and timestamps |
//! | [`error`] | Validation and access error types |
//! | [`fetcher`] | Authenticated GET with status classification |
//! | [`http_client`] | HTTP client abstraction |
//! | [`normalize`] | Provider payload to canonical model mapping |
//! | [`provider`] | Escavador payload shapes |
//! | [`query`] | Query-string builder |
//! | [`report`] | Result envelope and sink trait |
//! | [`use_cases`] | Host-invocable orchestrators |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Host / CLI     │
//! └────────┬────────┘
//!          │ params
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Use case       │────▶│ Provider config  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Fetcher        │────▶│ HTTP Client      │
//! └────────┬────────┘     │ (reqwest)        │
//!          │              └──────────────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Normalizer     │────▶│ Result sink      │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every failure inside an invocation becomes an [`AccessError`]. Use cases
//! never return it to the host; it is converted to a failure [`Report`]:
//!
//! ```rust
//! use jusbr_core::{AccessError, AccessErrorKind};
//!
//! fn describe(error: &AccessError) -> &'static str {
//!     match error.kind() {
//!         AccessErrorKind::Unauthorized | AccessErrorKind::MissingCredential => "check the token",
//!         AccessErrorKind::InsufficientCredit => "top up API credit",
//!         AccessErrorKind::NotFound => "nothing matched",
//!         _ => "retry later",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API token is read from the environment only and never logged
//! - `Debug` output of credentials is redacted

pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod normalize;
pub mod provider;
pub mod query;
pub mod report;
pub mod use_cases;

pub use config::{Environment, ProcessEnvironment, ProviderConfig, StaticEnvironment};

pub use domain::{
    Attorney, Movement, MovementDate, MovementSource, Party, PartyRole, Proceeding,
    ProceedingStatus, UtcDateTime,
};

pub use error::{AccessError, AccessErrorKind, ValidationError};

pub use fetcher::{Fetcher, NotFoundSubject};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use query::{build_query, QueryBuilder, QueryParams};

pub use report::{Report, ResultSink};

pub use use_cases::{
    dispatch, Host, LawyerProceedingsParams, LawyerProceedingsPayload, MovementsParams,
    MovementsPayload, PageLimit, ProceedingLookupParams, ProceedingLookupPayload, UseCase,
};
