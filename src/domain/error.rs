use std::io;

use thiserror::Error;

/// Library-wide error type for bundle composition.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required input file or directory is missing.
    #[error("Required input not found: {path}")]
    NotFound { path: String },

    /// Document could not be parsed as YAML.
    #[error("Failed to parse {path}: {details}")]
    Parse { path: String, details: String },

    /// Document parsed, but an expected field is absent or has the wrong shape.
    #[error("{path}: expected field '{field}' is missing or malformed")]
    Structure { path: String, field: String },

    /// Configuration issue.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The assembled descriptor could not be serialized.
    #[error("Failed to render ClusterServiceVersion: {0}")]
    Render(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Config(message.into())
    }

    pub(crate) fn structure(path: impl Into<String>, field: impl Into<String>) -> Self {
        AppError::Structure { path: path.into(), field: field.into() }
    }

    pub(crate) fn parse(path: impl Into<String>, details: impl ToString) -> Self {
        AppError::Parse { path: path.into(), details: details.to_string() }
    }

    /// Process exit code for this failure class.
    ///
    /// `1` is reserved for usage errors reported by the CLI parser.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io(_) | AppError::Render(_) => 2,
            AppError::NotFound { .. } => 3,
            AppError::Parse { .. } => 4,
            AppError::Structure { .. } => 5,
            AppError::Config(_) | AppError::TomlParseError(_) => 6,
        }
    }
}
