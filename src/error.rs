use std::io;

use thiserror::Error;

/// Why a formatting call produced no output.
///
/// The string-returning API maps every variant to an empty string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("'{0}' is not a numeric value")]
    NotNumeric(String),

    #[error("decimals must not be negative (got {0})")]
    NegativeDecimals(i32),

    #[error("negative byte count {0} cannot be formatted in strict mode")]
    NegativeBytes(f64),
}

/// Application-wide error type for the unitfmt CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch editor: {0}")]
    Editor(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}
