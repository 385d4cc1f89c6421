//! CLI argument definitions for jusbr.
//!
//! # Commands
//!
//! | Command | Use case |
//! |---------|----------|
//! | `processo` | `buscarProcesso` |
//! | `advogado` | `buscarAdvogado` |
//! | `movimentacoes` | `buscarMovimentacoes` |
//! | `run` | Any use case from raw JSON params |
//!
//! # Examples
//!
//! ```bash
//! ESCAVADOR_TOKEN=... jusbr processo 0000001-23.2020.8.26.0100 --pretty
//! jusbr advogado --estado SP --numero 123456 --tribunal TJSP --tribunal TRF3
//! jusbr movimentacoes 0000001-23.2020.8.26.0100 --limit 100
//! jusbr run buscarProcesso --params '[{"numeroProcesso": "0000001-23.2020.8.26.0100"}]'
//! ```

use clap::{Args, Parser, Subcommand};

/// Brazilian judicial proceedings via the Escavador API.
///
/// The token is read from `ESCAVADOR_TOKEN` (or `escavadorToken`). Results
/// are printed to stdout as `{"success", "data", "error"}`.
#[derive(Debug, Parser)]
#[command(name = "jusbr", author, version, about = "Escavador proceeding lookups")]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Provider base URL, overriding `ESCAVADOR_BASE_URL`.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one proceeding by CNJ number.
    Processo(ProcessoArgs),
    /// List proceedings linked to an OAB registration.
    Advogado(AdvogadoArgs),
    /// List docket movements of a proceeding.
    Movimentacoes(MovimentacoesArgs),
    /// Run a use case with raw JSON params, as an embedding host would.
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct ProcessoArgs {
    /// CNJ case number.
    pub numero: String,
}

#[derive(Debug, Args)]
pub struct AdvogadoArgs {
    /// OAB state (UF), e.g. SP.
    #[arg(long)]
    pub estado: String,

    /// OAB number.
    #[arg(long)]
    pub numero: String,

    /// Registration category (ADVOGADO, SUPLEMENTAR, ESTAGIARIO, CONSULTOR_ESTRANGEIRO).
    #[arg(long)]
    pub tipo: Option<String>,

    /// Sort order (asc, desc).
    #[arg(long)]
    pub ordem: Option<String>,

    /// Page size (50 or 100).
    #[arg(long)]
    pub limit: Option<u64>,

    /// Court filter; repeat for several courts.
    #[arg(long = "tribunal")]
    pub tribunais: Vec<String>,

    /// Status filter (ATIVO, INATIVO).
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub data_minima: Option<String>,

    #[arg(long)]
    pub data_maxima: Option<String>,
}

#[derive(Debug, Args)]
pub struct MovimentacoesArgs {
    /// CNJ case number.
    pub numero: String,

    /// Page size (50 or 100).
    #[arg(long)]
    pub limit: Option<u64>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Use case name: buscarProcesso, buscarAdvogado or buscarMovimentacoes.
    pub use_case: String,

    /// Params as a JSON object or a one-element array.
    #[arg(long, default_value = "{}")]
    pub params: String,
}
