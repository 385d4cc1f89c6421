mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use jusbr_core::{dispatch, Host, ProcessEnvironment, ReqwestHttpClient};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::StdoutSink;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

/// Logs go to stderr; stdout carries only the JSON report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    let (use_case, params) = commands::invocation(&cli.command)?;
    debug!(use_case = %use_case, "dispatching");

    let sink = Arc::new(StdoutSink::new());
    let mut host = Host::new(
        Arc::new(ProcessEnvironment),
        sink.clone(),
        Arc::new(ReqwestHttpClient::new()),
    );
    if let Some(base_url) = &cli.base_url {
        host = host.with_base_url(base_url);
    }

    dispatch(&host, use_case, params).await;

    if sink.flush(cli.pretty)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(3))
    }
}
