//! Unified error handling for vdesign-core.
//!
//! Wraps domain and application errors in one type with user-actionable
//! suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for vdesign-core operations.
#[derive(Debug, Error, Clone)]
pub enum VdesignError {
    /// Compile-time validation failures.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Loading or rendering failures.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl VdesignError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in vdesign".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type VdesignResult<T> = Result<T, VdesignError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> VdesignResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> VdesignResult<T> {
        self.map_err(|e| VdesignError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_categories_carry_over() {
        let err: VdesignError = DomainError::UnknownDesign { name: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("vdesign designs")));

        let err: VdesignError = DomainError::InvalidEmitsConfig { kind: "String".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn context_wraps_as_internal() {
        let res: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = res.context("formatting").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("formatting"));
    }
}
