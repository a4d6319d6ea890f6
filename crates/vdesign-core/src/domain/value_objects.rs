//! Domain value objects: TypeTag, SourceKind, ChannelSide.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Each has a
//! stable string form and a `FromStr` parser.

use crate::domain::error::DomainError;
use crate::domain::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TypeTag ───────────────────────────────────────────────────────────────────

/// Runtime type of a property, inferred from its example value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Number,
    String,
    Boolean,
    Object,
    Array,
    Function,
}

impl TypeTag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Function => "Function",
        }
    }

    /// Tag for an example value, or `None` for kinds a prop cannot carry.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Number(_) => Some(Self::Number),
            Value::String(_) => Some(Self::String),
            Value::Bool(_) => Some(Self::Boolean),
            Value::Object(_) => Some(Self::Object),
            Value::Array(_) => Some(Self::Array),
            Value::Function(_) => Some(Self::Function),
            Value::Undefined | Value::Null => None,
        }
    }

    /// Reference kinds get a factory default instead of a literal.
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Object | Self::Array | Self::Function)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Number" => Ok(Self::Number),
            "String" => Ok(Self::String),
            "Boolean" => Ok(Self::Boolean),
            "Object" => Ok(Self::Object),
            "Array" => Ok(Self::Array),
            "Function" => Ok(Self::Function),
            other => Err(DomainError::InvalidOptionsField {
                field: "props.type".into(),
                kind: other.into(),
            }),
        }
    }
}

// ── SourceKind ────────────────────────────────────────────────────────────────

/// Where a design trait keeps its state: declared props or instance data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Props,
    Data,
}

impl SourceKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Props => "props",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "props" | "prop" => Ok(Self::Props),
            "data" => Ok(Self::Data),
            other => Err(DomainError::InvalidDesignConfig {
                design: "sourceType".into(),
                kind: format!("unknown source '{other}'"),
            }),
        }
    }
}

// ── ChannelSide ───────────────────────────────────────────────────────────────

/// Which half of a dependency channel a design builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelSide {
    Provide,
    Inject,
}

impl ChannelSide {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Provide => "provide",
            Self::Inject => "inject",
        }
    }
}

impl fmt::Display for ChannelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
