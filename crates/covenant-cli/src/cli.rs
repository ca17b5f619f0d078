//! CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Covenant - Extract structured terms from a contract with a hosted LLM.
///
/// Without --input, a built-in sample contract is analyzed.
#[derive(Debug, Parser)]
#[command(name = "covenant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Contract text file to analyze
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(short, long, env = "COVENANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model to use, overriding the configuration
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
