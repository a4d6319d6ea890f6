//! Option handling shared by the option-driven designs.

use std::str::FromStr;

use crate::domain::compiler::{compile_props, normalize_data};
use crate::domain::entities::TraitFragment;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Map, Value};
use crate::domain::value_objects::SourceKind;

/// Key selecting where a design keeps its state.
pub const SOURCE_TYPE_KEY: &str = "sourceType";
/// Key carrying a token -> class preset mapping.
pub const PRESETS_KEY: &str = "presets";

/// A design's built-in defaults with the caller's overrides on top.
#[derive(Debug, Clone)]
pub struct DesignOptions {
    design: &'static str,
    values: Map,
}

impl DesignOptions {
    /// Shallow-merge `config` over `defaults`. Only a mapping (or nothing)
    /// is accepted.
    pub fn merge(design: &'static str, defaults: Map, config: Option<&Value>) -> DomainResult<Self> {
        let mut values = defaults;
        match config {
            None | Some(Value::Undefined) | Some(Value::Bool(true)) => {}
            Some(Value::Object(overrides)) => {
                for (key, value) in overrides {
                    values.insert(key.clone(), value.clone());
                }
            }
            Some(other) => {
                return Err(DomainError::InvalidDesignConfig {
                    design: design.to_owned(),
                    kind: other.kind().to_owned(),
                });
            }
        }
        Ok(Self { design, values })
    }

    pub fn design(&self) -> &'static str {
        self.design
    }

    /// Merged value of `key`; `undefined` when neither side set it.
    pub fn get(&self, key: &str) -> Value {
        self.values.get(key).cloned().unwrap_or_default()
    }

    /// Non-empty string value of `key`.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.values.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// `sourceType`, defaulting to props.
    pub fn source_kind(&self) -> DomainResult<SourceKind> {
        match self.values.get(SOURCE_TYPE_KEY) {
            None | Some(Value::Undefined) | Some(Value::Null) => Ok(SourceKind::default()),
            Some(Value::String(s)) => SourceKind::from_str(s),
            Some(other) => Err(DomainError::InvalidDesignConfig {
                design: self.design.to_owned(),
                kind: format!("{SOURCE_TYPE_KEY} of type {}", other.kind()),
            }),
        }
    }

    /// `presets`, when given. Anything but a mapping is rejected.
    pub fn presets(&self) -> DomainResult<Option<Map>> {
        match self.values.get(PRESETS_KEY) {
            None | Some(Value::Undefined) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map.clone())),
            Some(other) => Err(DomainError::InvalidPresetType {
                design: self.design.to_owned(),
                kind: other.kind().to_owned(),
            }),
        }
    }

    /// The state sample: the merged values of `keys`, in that order.
    pub fn sample(&self, keys: &[&str]) -> Map {
        keys.iter()
            .map(|key| ((*key).to_owned(), self.get(key)))
            .collect()
    }

    /// Fragment holding `keys` as props or data, per `sourceType`.
    pub fn state_fragment(&self, keys: &[&str]) -> DomainResult<TraitFragment> {
        let sample = self.sample(keys);
        let fragment = TraitFragment::new(self.design);
        Ok(match self.source_kind()? {
            SourceKind::Props => fragment.with_props(compile_props(&sample)?),
            SourceKind::Data => fragment.with_data(normalize_data(&Value::Object(sample))?),
        })
    }
}
