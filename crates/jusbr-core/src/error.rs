use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Input validation errors raised before any network access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("numeroProcesso vazio")]
    EmptyCaseNumber,
    #[error("É necessário informar o número do processo")]
    CaseNumberRequired,
    #[error("É necessário informar estado e número da OAB")]
    OabRequired,

    #[error("limit deve ser 50 ou 100: '{value}'")]
    InvalidLimit { value: u64 },
    #[error("parâmetros inválidos: {reason}")]
    InvalidParams { reason: String },

    #[error("timestamp must be RFC3339 or YYYY-MM-DD: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Failure classification for a single provider round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessErrorKind {
    InvalidInput,
    MissingCredential,
    Unauthorized,
    InsufficientCredit,
    NotFound,
    HttpStatus,
    Transport,
    Decode,
}

/// Structured error carried from the access layer up to the use-case boundary.
///
/// `message` is the human-readable text that ends up in the failure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError {
    kind: AccessErrorKind,
    message: String,
    status: Option<u16>,
}

impl AccessError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(AccessErrorKind::InvalidInput, message)
    }

    pub fn missing_credential() -> Self {
        Self::new(
            AccessErrorKind::MissingCredential,
            "Token do Escavador não configurado",
        )
    }

    pub fn unauthorized() -> Self {
        Self::new(AccessErrorKind::Unauthorized, "Token de acesso inválido ou expirado")
            .with_status(401)
    }

    pub fn insufficient_credit() -> Self {
        Self::new(
            AccessErrorKind::InsufficientCredit,
            "Você não possui saldo em crédito da API",
        )
        .with_status(402)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AccessErrorKind::NotFound, message).with_status(404)
    }

    pub fn http_status(status: u16) -> Self {
        Self::new(AccessErrorKind::HttpStatus, format!("Falha HTTP {status}")).with_status(status)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(AccessErrorKind::Transport, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AccessErrorKind::Decode, message)
    }

    fn new(kind: AccessErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub const fn kind(&self) -> AccessErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status that produced this error, when it came from a response.
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// True for failures detected before the request left the process.
    pub const fn is_local(&self) -> bool {
        matches!(
            self.kind,
            AccessErrorKind::InvalidInput | AccessErrorKind::MissingCredential
        )
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            AccessErrorKind::InvalidInput => "access.invalid_input",
            AccessErrorKind::MissingCredential => "access.missing_credential",
            AccessErrorKind::Unauthorized => "access.unauthorized",
            AccessErrorKind::InsufficientCredit => "access.insufficient_credit",
            AccessErrorKind::NotFound => "access.not_found",
            AccessErrorKind::HttpStatus => "access.http_status",
            AccessErrorKind::Transport => "access.transport",
            AccessErrorKind::Decode => "access.decode",
        }
    }
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for AccessError {}

impl From<ValidationError> for AccessError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_input(error.to_string())
    }
}
