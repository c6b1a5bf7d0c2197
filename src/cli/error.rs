//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

use crate::profile::ProfileError;

/// Errors reported by CLI commands; every variant maps to exit status 1
#[derive(Error, Debug)]
pub enum CliError {
    /// Database file could not be read
    #[error("Could not open file {0}: {1}")]
    FileReadError(PathBuf, String),

    /// Database file is not valid JSON
    #[error("Could not parse file {0}: {1}")]
    ParseError(PathBuf, String),

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration in {0}: {1}")]
    ConfigError(PathBuf, String),

    /// Profiling the requested table failed
    #[error("No descriptor set found for table {table}: {source}")]
    ProfileError {
        table: String,
        #[source]
        source: ProfileError,
    },

    /// Rendering the result failed
    #[error("Output error: {0}")]
    OutputError(String),
}
