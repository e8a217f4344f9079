use clap::Parser;
use loan_calc::application::engine::AmortizationEngine;
use loan_calc::interfaces::cli::Cli;
use loan_calc::interfaces::report::ReportWriter;
use miette::{IntoDiagnostic, Result};
use std::io::{self, BufWriter};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.extra.is_empty() {
        debug!(count = cli.extra.len(), "ignoring positional arguments");
    }

    let request = cli.to_request();
    let engine = AmortizationEngine::new();

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(BufWriter::new(stdout.lock()));
    match engine.calculate(&request) {
        Ok(Some(result)) => writer.write_result(&result).into_diagnostic()?,
        Ok(None) => debug!("no calculation matches the supplied parameters"),
        Err(e) => {
            warn!(error = ?e, "loan request rejected");
            writer.write_rejection(&e).into_diagnostic()?;
        }
    }

    Ok(())
}

// Logs go to stderr; stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
