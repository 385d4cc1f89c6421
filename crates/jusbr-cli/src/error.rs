use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
///
/// Provider and validation failures inside a use case are not CLI errors;
/// they arrive as failure reports and exit with code 3.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] jusbr_core::ValidationError),

    #[error("invalid --params JSON: {0}")]
    Params(serde_json::Error),

    #[error("use case finished without a report")]
    MissingReport,

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Params(_) => 2,
            Self::MissingReport => 5,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}
