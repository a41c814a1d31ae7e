//! lectio_cli - command-line interface for the lectio calendar engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use config::Config;
pub use error::{CliError, Result};
