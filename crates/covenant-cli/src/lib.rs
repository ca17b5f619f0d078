//! Covenant CLI library.
//!
//! Argument parsing, configuration loading and output formatting for the
//! `covenant` sample runner.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod sample;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::Formatter;
