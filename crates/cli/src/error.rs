//! CLI error types

use std::path::PathBuf;

use rootline_expr::ParseError;
use rootline_solvers::equation::newton;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be read
    #[error("cannot read settings from {}: {source}", .path.display())]
    SettingsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid TOML or has unknown keys
    #[error("invalid settings: {0}")]
    Settings(#[from] toml::de::Error),

    /// Settings hold values the solver rejects
    #[error("invalid solver settings: {0}")]
    Config(#[from] newton::ConfigError),

    /// Invalid command-line argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input ended while a prompt was waiting for an answer
    #[error("input ended before {0} was given")]
    EndOfInput(String),

    /// An answer that should be a number is not one
    #[error("{what} must be a number, got `{text}`")]
    InvalidNumber { what: String, text: String },

    /// Equation count the chosen mode cannot handle
    #[error("{0}")]
    InvalidCount(String),

    /// Equation text did not parse
    #[error("equation {index}: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },

    /// The solver rejected the problem or failed to evaluate it
    #[error("solve failed: {0}")]
    Solve(#[from] newton::Error),
}
