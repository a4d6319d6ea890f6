//! Namespaced provide/inject channels.
//!
//! A provider exposes each of its operations under `<prefix><Operation>`,
//! bound to the providing instance; an injector declares the same keys with
//! an `undefined` fallback.

use indexmap::IndexMap;

use crate::domain::designs::capitalize;
use crate::domain::entities::{InjectDescriptor, ProvideFactory, Provided, TraitFragment};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Callable, Value};
use crate::domain::value_objects::ChannelSide;

/// `prefix` + capitalized `operation`: `("foo", "useCounter")` gives
/// `fooUseCounter`.
pub fn channel_key(prefix: &str, operation: &str) -> String {
    format!("{prefix}{}", capitalize(operation))
}

/// Extract the namespace prefix: a non-empty string, or a mapping whose
/// `name` is one.
pub fn require_name(
    design: &'static str,
    side: ChannelSide,
    config: Option<&Value>,
) -> DomainResult<String> {
    let name = match config {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Object(map)) => map.get("name").and_then(Value::as_str),
        _ => None,
    };
    match name {
        Some(name) if !name.is_empty() => Ok(name.to_owned()),
        _ => Err(DomainError::MissingOrInvalidName { design, side }),
    }
}

/// Provider fragment exposing `operations` under `prefix`.
pub fn provide_fragment(
    design: &'static str,
    prefix: &str,
    operations: IndexMap<String, Callable>,
) -> TraitFragment {
    let exposed: Vec<(String, Callable)> = operations
        .iter()
        .map(|(op, f)| (channel_key(prefix, op), f.clone()))
        .collect();

    let provide = ProvideFactory::new(move |ctx| {
        exposed
            .iter()
            .map(|(key, f)| (key.clone(), Value::Function(f.bind(ctx))))
            .collect::<Provided>()
    });

    TraitFragment::new(design)
        .with_methods(operations)
        .with_provide(provide)
}

/// Injector fragment declaring `operations` under `prefix`.
pub fn inject_fragment(design: &'static str, prefix: &str, operations: &[&str]) -> TraitFragment {
    let inject = operations
        .iter()
        .map(|op| {
            let key = channel_key(prefix, op);
            (key.clone(), InjectDescriptor::undefined(key))
        })
        .collect();
    TraitFragment::new(design).with_inject(inject)
}
