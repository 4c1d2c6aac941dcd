//! Error types and exit codes for namecat
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable catalog, unknown name, etc.)
//!
//! The scoring engine itself never fails; these errors belong to the
//! configuration, catalog and command surfaces around it.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the namecat binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable catalog, unknown name (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during namecat operations
#[derive(Error, Debug)]
pub enum NamecatError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("name not found: {query}")]
    NameNotFound { query: String },

    #[error("invalid catalog {path:?}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl NamecatError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NamecatError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        NamecatError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a catalog file that could not be used
    pub fn invalid_catalog(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        NamecatError::InvalidCatalog {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NamecatError::UnknownFormat(_)
            | NamecatError::UsageError(_)
            | NamecatError::InvalidValue { .. }
            | NamecatError::Unsupported { .. } => ExitCode::Usage,

            NamecatError::NameNotFound { .. } | NamecatError::InvalidCatalog { .. } => {
                ExitCode::Data
            }

            NamecatError::Io(_)
            | NamecatError::Json(_)
            | NamecatError::Toml(_)
            | NamecatError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NamecatError::UnknownFormat(_) => "unknown_format",
            NamecatError::UsageError(_) => "usage_error",
            NamecatError::InvalidValue { .. } => "invalid_value",
            NamecatError::Unsupported { .. } => "unsupported",
            NamecatError::NameNotFound { .. } => "name_not_found",
            NamecatError::InvalidCatalog { .. } => "invalid_catalog",
            NamecatError::Io(_) => "io_error",
            NamecatError::Json(_) => "json_error",
            NamecatError::Toml(_) => "toml_error",
            NamecatError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for namecat operations
pub type Result<T> = std::result::Result<T, NamecatError>;
