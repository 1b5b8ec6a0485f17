//! Prtally CLI entrypoint for refreshing the contributions README section.

use std::process::ExitCode;

use ortho_config::OrthoConfig;
use prtally::{HttpSearchGateway, PrtallyConfig, RunConfig, RunError, logging, pipeline};

fn main() -> ExitCode {
    logging::init();
    match run() {
        Ok(()) => {
            tracing::info!("Done!");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RunError> {
    let config = load_config()?;
    let gateway = HttpSearchGateway::new(&config.api_base, config.token.clone(), config.timeout)?;
    let summary = pipeline::run(&config, &gateway)?;
    tracing::debug!(
        fetched = summary.fetched,
        repositories = summary.repositories,
        pull_requests = summary.pull_requests,
        "run complete"
    );
    Ok(())
}

/// Loads configuration from CLI, environment, and files, then resolves it.
///
/// # Errors
///
/// Returns [`RunError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files, or when a required value is
/// missing or invalid.
fn load_config() -> Result<RunConfig, RunError> {
    PrtallyConfig::load()
        .map_err(|error| RunError::Configuration {
            message: error.to_string(),
        })?
        .resolve()
}
