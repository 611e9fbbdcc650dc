use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use crate::commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match crate::commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(
                kind = crate::commands::error_kind(&e),
                error = ?e,
                "command failed"
            );
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
