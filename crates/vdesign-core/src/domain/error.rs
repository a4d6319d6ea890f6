// ============================================================================
// domain/error.rs - COMPILE-TIME VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ChannelSide;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable and comparable (tests match on exact variants)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Every message names the offending key or design and, where relevant, the
/// kind of value that was actually supplied.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Compiler errors
    // ========================================================================
    #[error("props compiler does not support type {kind} for key '{key}'")]
    UnsupportedPropertyType { key: String, kind: String },

    #[error("computed compiler does not support config type {kind} for key '{key}'")]
    UnsupportedComputedConfig { key: String, kind: String },

    #[error(
        "computed compiler cannot use the array config for key '{key}': \
         length must be 2 or 3, got {len}"
    )]
    InvalidBranchArity { key: String, len: usize },

    #[error("methods compiler does not support config type {kind} for key '{key}'")]
    UnsupportedMethodConfig { key: String, kind: String },

    #[error("methods compiler has no recipe named '{key}'")]
    UnknownMethodRecipe { key: String },

    #[error("data source must be a function or a mapping, got {kind}")]
    UnsupportedDataSource { kind: String },

    // ========================================================================
    // Design errors
    // ========================================================================
    #[error("design-{design} presets must be a mapping, got {kind}")]
    InvalidPresetType { design: String, kind: String },

    #[error("emits design requires an Array of event names, got {kind}")]
    InvalidEmitsConfig { kind: String },

    #[error("{design} {side} config requires a non-empty string name")]
    MissingOrInvalidName {
        design: &'static str,
        side: ChannelSide,
    },

    #[error("unknown design '{name}'")]
    UnknownDesign { name: String },

    #[error("design '{design}' cannot be configured with {kind}")]
    InvalidDesignConfig { design: String, kind: String },

    // ========================================================================
    // Options errors
    // ========================================================================
    #[error("options field '{field}' has unsupported type {kind}")]
    InvalidOptionsField { field: String, kind: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedPropertyType { key, .. } => vec![
                format!("Give '{key}' an example value"),
                "Supported examples: number, string, boolean, object, array, function".into(),
            ],
            Self::UnsupportedComputedConfig { key, .. } => vec![
                format!("Configure '{key}' as a function, a {{get, set}} object,"),
                "  a template string, a 2/3-element branch array, or a lookup mapping".into(),
            ],
            Self::InvalidBranchArity { key, .. } => vec![
                format!("Use [truthy, falsy] or [expected, truthy, falsy] for '{key}'"),
            ],
            Self::UnknownMethodRecipe { key } => vec![
                format!("'{key}' is not a built-in method recipe"),
                "Available recipes: toggle".into(),
            ],
            Self::InvalidPresetType { design, .. } => vec![
                format!("Pass presets for '{design}' as a token -> class mapping"),
            ],
            Self::InvalidEmitsConfig { .. } => vec![
                "Configure emits with a list of event names, e.g. [\"click\"]".into(),
            ],
            Self::MissingOrInvalidName { design, .. } => vec![
                format!("Pass a namespace prefix to the {design} design, e.g. \"form\""),
                "Channel keys are built as <prefix><Operation>".into(),
            ],
            Self::UnknownDesign { name } => vec![
                format!("'{name}' is not a built-in design"),
                "Try: vdesign designs".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDesign { .. } | Self::UnknownMethodRecipe { .. } => {
                ErrorCategory::NotFound
            }
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Result alias for pure compile steps.
pub type DomainResult<T> = Result<T, DomainError>;
