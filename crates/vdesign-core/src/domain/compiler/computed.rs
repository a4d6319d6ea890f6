//! Derived-value compiler.
//!
//! A derived value named `Foo` formats the instance property `foo` (the
//! name with its first character lower-cased). The configured shape picks one
//! of five modes, in this precedence:
//!
//! | Spec                     | Mode                                        |
//! |--------------------------|---------------------------------------------|
//! | function                 | getter, used verbatim                       |
//! | `{ get, set? }`          | accessor, used verbatim                     |
//! | `"bar-$"`                | template; `null` while the source is falsy  |
//! | `[truthy, falsy]`        | branch on the source's truthiness           |
//! | `[expected, t, f]`       | branch on strict equality with `expected`   |
//! | `{ token: "cls-$" }`     | lookup; misses pass the raw source through  |
//!
//! In every template `$` is replaced by the source value's string form. The
//! mode is fixed here, once; the getter never re-inspects the configuration.

use indexmap::IndexMap;

use crate::domain::entities::DerivedDescriptor;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Map, Value};

/// Placeholder replaced by the source value.
pub const PLACEHOLDER: char = '$';

/// Formatting mode of a compiled derived value.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivedMode {
    Template(String),
    Branch { truthy: Value, falsy: Value },
    Match { expected: Value, truthy: Value, falsy: Value },
    Lookup(Map),
}

impl DerivedMode {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Template(_) => "template",
            Self::Branch { .. } => "branch",
            Self::Match { .. } => "match",
            Self::Lookup(_) => "lookup",
        }
    }

    /// Format `source`, the current value of the source property.
    pub fn resolve(&self, source: &Value) -> Value {
        match self {
            Self::Template(template) => {
                if source.is_truthy() {
                    Value::String(template.replace(PLACEHOLDER, &source.to_string()))
                } else {
                    Value::Null
                }
            }
            Self::Branch { truthy, falsy } => {
                let chosen = if source.is_truthy() { truthy } else { falsy };
                substitute(chosen, source)
            }
            Self::Match {
                expected,
                truthy,
                falsy,
            } => {
                let chosen = if source.strict_eq(expected) {
                    truthy
                } else {
                    falsy
                };
                substitute(chosen, source)
            }
            Self::Lookup(table) => match table.get(&source.to_string()) {
                Some(hit) => substitute(hit, source),
                None => source.clone(),
            },
        }
    }
}

fn substitute(template: &Value, source: &Value) -> Value {
    match template {
        Value::String(s) => Value::String(s.replace(PLACEHOLDER, &source.to_string())),
        other => other.clone(),
    }
}

/// Source property of a derived value: `Color` reads `color`.
pub fn source_key(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compile one derived-value spec.
pub fn compile_derived(key: &str, spec: &Value) -> DomainResult<DerivedDescriptor> {
    let mode = match spec {
        Value::Function(get) => return Ok(DerivedDescriptor::Getter(get.clone())),
        Value::Object(map) => match map.get("get") {
            Some(Value::Function(get)) => {
                return Ok(DerivedDescriptor::Accessor {
                    get: get.clone(),
                    set: map.get("set").and_then(Value::as_function).cloned(),
                });
            }
            _ => DerivedMode::Lookup(map.clone()),
        },
        Value::String(template) => DerivedMode::Template(template.clone()),
        Value::Array(items) => match items.as_slice() {
            [truthy, falsy] => DerivedMode::Branch {
                truthy: truthy.clone(),
                falsy: falsy.clone(),
            },
            [expected, truthy, falsy] => DerivedMode::Match {
                expected: expected.clone(),
                truthy: truthy.clone(),
                falsy: falsy.clone(),
            },
            _ => {
                return Err(DomainError::InvalidBranchArity {
                    key: key.to_owned(),
                    len: items.len(),
                });
            }
        },
        other => {
            return Err(DomainError::UnsupportedComputedConfig {
                key: key.to_owned(),
                kind: other.kind().to_owned(),
            });
        }
    };

    Ok(DerivedDescriptor::Formatted {
        source: source_key(key),
        mode,
    })
}

/// Compile a mapping of derived-value specs, preserving key order.
pub fn compile_computed(specs: &Map) -> DomainResult<IndexMap<String, DerivedDescriptor>> {
    specs
        .iter()
        .map(|(key, spec)| Ok((key.clone(), compile_derived(key, spec)?)))
        .collect()
}
