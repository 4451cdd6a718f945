use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::*;

use crate::commands::handle_scaffold;
use crate::error::DefectError;
use crate::services::config::{load_config, resolve_settings, DEFAULT_LOG_FILTER};
use crate::services::output::print_error;

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let file = match load_config(cli.config.as_deref()) {
        Ok(file) => file,
        Err(e) => {
            init_tracing(DEFAULT_LOG_FILTER);
            return Err(e);
        }
    };
    let cwd = std::env::current_dir()?;
    let settings = resolve_settings(cli, file, cwd);
    init_tracing(&settings.log_filter);
    tracing::debug!(
        base_dir = %settings.base_dir.display(),
        schema = settings.schema.as_str(),
        "resolved settings"
    );

    handle_scaffold(cli, &settings)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (kind, usage) = match err.downcast_ref::<DefectError>() {
                Some(e @ DefectError::Usage(_)) => (e.kind(), true),
                Some(e) => (e.kind(), false),
                None => ("error", false),
            };
            print_error(cli.json, kind, &format!("{:#}", err));
            if usage {
                eprintln!();
                eprintln!("{}", USAGE_TEXT);
            }
            ExitCode::from(1)
        }
    }
}
