//! Covenant CLI - Run a contract through the extractor and print the result as JSON.

use clap::Parser;
use covenant_cli::sample::SAMPLE_CONTRACT;
use covenant_cli::{config, Cli, Formatter};
use covenant_extractor::ContractExtractor;
use covenant_llm::GeminiProvider;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize tracing (log to stderr, stdout carries the JSON)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether extraction succeeded.
fn run() -> covenant_cli::Result<bool> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref(), cli.model.as_deref())?;
    let formatter = Formatter::new(cli.compact, !cli.no_color);

    let text = match &cli.input {
        Some(path) => {
            info!("Reading contract from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            info!("No input file given, using the built-in sample contract");
            SAMPLE_CONTRACT.to_string()
        }
    };

    let provider = GeminiProvider::new(config.provider.clone())?;
    let extractor = ContractExtractor::new(provider, config);

    match extractor.extract(&text) {
        Some(result) => {
            println!("{}", formatter.format_result(&result)?);
            Ok(true)
        }
        None => {
            println!("{}", formatter.failure());
            Ok(false)
        }
    }
}
