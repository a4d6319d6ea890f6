//! Application layer errors.
//!
//! These errors represent failures in loading and rendering, not in
//! compilation. Compile failures are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No options bag with that name.
    #[error("Options source '{name}' not found")]
    SourceNotFound { name: String },

    /// The options file exists but could not be read.
    #[error("Failed to read {path}: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },

    /// The options file is not valid JSON/TOML.
    #[error("Failed to parse {origin}: {reason}")]
    ParseFailed { origin: String, reason: String },

    /// Options file extension is neither JSON nor TOML.
    #[error("Unsupported options format '{extension}'")]
    UnsupportedFormat { extension: String },

    /// Manifest rendering failed.
    #[error("Manifest rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// The compiled definition has no derived value with that name.
    #[error("Definition has no computed value '{name}'")]
    UnknownComputed { name: String },

    /// Store access failed (lock poisoned).
    #[error("Options store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceNotFound { name } => vec![
                format!("No options named '{name}'"),
                "Check the path, or list the options directory".into(),
            ],
            Self::SourceUnreadable { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::ParseFailed { .. } => vec![
                "Options files must be a JSON object or a TOML table".into(),
            ],
            Self::UnsupportedFormat { .. } => {
                vec!["Use a .json or .toml options file".into()]
            }
            Self::UnknownComputed { name } => vec![
                format!("'{name}' is neither declared nor produced by a design"),
                "Try: vdesign compile <FILE> to list computed values".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceNotFound { .. } | Self::UnknownComputed { .. } => ErrorCategory::NotFound,
            Self::ParseFailed { .. } | Self::UnsupportedFormat { .. } => ErrorCategory::Validation,
            Self::SourceUnreadable { .. } | Self::RenderingFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
