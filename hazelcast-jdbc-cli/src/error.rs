//! CLI error types and result alias.

use hazelcast_jdbc_config::ConnectionError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(hzjdbc::io))]
    Io(#[from] std::io::Error),

    /// URL or baseline error
    #[error("{0}")]
    #[diagnostic(code(hzjdbc::connection))]
    Connection(#[from] ConnectionError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(hzjdbc::config))]
    Config(String),

    /// Output format error
    #[error("Format error: {0}")]
    #[diagnostic(code(hzjdbc::format))]
    Format(String),

    /// Command error
    #[error("Command error: {0}")]
    #[diagnostic(code(hzjdbc::command))]
    Command(String),
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Format(format!("Failed to serialize TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Format(format!("Failed to serialize JSON: {}", err))
    }
}
