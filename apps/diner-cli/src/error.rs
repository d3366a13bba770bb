//! # CLI Error Type
//!
//! Unified error type for the terminal application.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shell Diner                            │
//! │                                                                         │
//! │  Config file ──── toml / io failure ──────► ConfigLoadFailed ─┐        │
//! │  Menu build  ──── CoreError::Construction ► Core ─────────────┤        │
//! │  Prompt      ──── dialoguer::Error ───────► Prompt ───────────┼──► main │
//! │  Stdout      ──── io::Error ──────────────► Output ───────────┘   exit 1│
//! │                                                                         │
//! │  Pricing failures never get here: they print as "ERROR" in the bill.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use diner_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can stop the program.
#[derive(Debug, Error)]
pub enum CliError {
    /// Menu definition or selection lookup failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The selection prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Writing to the terminal failed.
    #[error("Output failed: {0}")]
    Output(#[from] std::io::Error),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to encode the JSON bill.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: CliError = CoreError::OptionNotFound("Fries".to_string()).into();
        assert_eq!(err.to_string(), "Option not found: Fries");
    }

    #[test]
    fn test_toml_error_is_config_load_failure() {
        let err: CliError = toml::from_str::<toml::Table>("[prompt").unwrap_err().into();
        assert!(matches!(err, CliError::ConfigLoadFailed(_)));
    }
}
