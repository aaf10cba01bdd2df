use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::templates::TemplateError;

/// Which required input path was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Directory holding the indexed fragments.
    ResultDirectory,
    /// Analysis launch executable (`abrun.sh`).
    Executable,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::ResultDirectory => write!(f, "result dir"),
            PathKind::Executable => write!(f, "analysis executable"),
        }
    }
}

/// Library-wide error type for rsn-suite operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside artifact emission.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required input path does not exist.
    #[error("{kind} {} does not exist", path.display())]
    PathNotFound { kind: PathKind, path: PathBuf },

    /// Required parameter absent from overrides, site config and defaults.
    #[error("Missing parameter '{0}': pass it on the command line or set it in the site config")]
    MissingParameter(String),

    /// Parameter present but unusable.
    #[error("Invalid value '{value}' for parameter '{field}': {reason}")]
    InvalidParameter { field: String, value: String, reason: String },

    /// Site configuration could not be read.
    #[error("Site config error: {0}")]
    SiteConfig(String),

    /// Site configuration is not valid TOML.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Template schema or rendering failure.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Writing a generated artifact failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Resolved values could not be formatted for display.
    #[error("Format error: {0}")]
    Format(String),
}

impl AppError {
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AppError::InvalidParameter { field: field.into(), value: value.into(), reason: reason.into() }
    }

    /// Process exit status reported by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::PathNotFound { kind: PathKind::ResultDirectory, .. } => 1,
            AppError::PathNotFound { kind: PathKind::Executable, .. } => 2,
            AppError::MissingParameter(_)
            | AppError::InvalidParameter { .. }
            | AppError::SiteConfig(_)
            | AppError::TomlParseError(_) => 3,
            AppError::Template(_) => 4,
            AppError::Write { .. } | AppError::Io(_) | AppError::Format(_) => 5,
        }
    }
}
