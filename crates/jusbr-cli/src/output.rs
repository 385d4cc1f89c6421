use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use jusbr_core::{Report, ResultSink};

use crate::error::CliError;

/// Holds the invocation report until it is written to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink {
    report: Mutex<Option<Report>>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the captured report. Returns whether the invocation succeeded.
    pub fn flush(&self, pretty: bool) -> Result<bool, CliError> {
        let report = self
            .report
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(CliError::MissingReport)?;

        let mut stdout = io::stdout().lock();
        render(&mut stdout, &report, pretty)?;
        Ok(report.success)
    }
}

impl ResultSink for StdoutSink {
    fn report(&self, report: Report) {
        *self.report.lock().unwrap_or_else(PoisonError::into_inner) = Some(report);
    }
}

pub fn render(writer: &mut impl Write, report: &Report, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    writeln!(writer, "{payload}")?;
    Ok(())
}
