//! Moneta command-line tool
//!
//! Splits, allocates, rounds, formats and encodes money from the shell.
//! Results go to stdout; logs go to stderr.

mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{Cli, Command, Context};
use moneta_shared::{AppConfig, AppError, AppResult, LogConfig};

fn main() -> ExitCode {
    // Help and version go to stdout and succeed; usage errors exit like any
    // other invalid input
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                exit_code(&AppError::InvalidInput(err.to_string()))
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(AppError::from);

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = config
        .as_ref()
        .map_or_else(|_| LogConfig::default().filter, |c| c.log.filter.clone());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(config, &cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            err.downcast_ref::<AppError>()
                .map_or(ExitCode::from(70), exit_code)
        }
    }
}

fn run(config: AppResult<AppConfig>, command: &Command) -> anyhow::Result<()> {
    let config = config?;
    let context = Context::from_config(&config);
    debug!(?command, currencies = config.currencies.len(), "running command");

    for line in context.run(command)? {
        println!("{line}");
    }
    Ok(())
}

fn exit_code(err: &AppError) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}
