//! cloudpic CLI - upload and delete images from the terminal
//!
//! Credentials come from `CLOUD_NAME`, `API_KEY` and `API_SECRET`, read from
//! the environment after loading an optional `.env` file.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::destroy::run_destroy;
use crate::commands::sign::run_sign;
use crate::commands::upload::run_upload;
use crate::error::CliError;

const DEFAULT_LOG_DIRECTIVES: [&str; 2] = ["cloudpic=info", "cloudpic_core=info"];

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` directives, with info-level output for this crate and the core
/// library layered on top.
fn log_filter() -> EnvFilter {
    DEFAULT_LOG_DIRECTIVES
        .iter()
        .filter_map(|directive| directive.parse::<Directive>().ok())
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive)
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            public_id,
            json,
        } => run_upload(file, public_id.as_deref(), json).await?,
        Commands::Destroy { public_id } => run_destroy(&public_id).await?,
        Commands::Sign { public_id, json } => run_sign(&public_id, json)?,
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
    }

    Ok(())
}
