//! Event-declaration design.

use indexmap::IndexMap;

use crate::domain::entities::TraitFragment;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Callable, Value};

pub const NAME: &str = "emits";

/// Declare `events` and add one same-named method per event that forwards
/// its payload to the instance's emit primitive.
pub fn emits(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let events: Vec<String> = match config {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(Value::to_string).collect(),
        Some(other) => {
            return Err(DomainError::InvalidEmitsConfig {
                kind: other.kind().to_owned(),
            });
        }
    };

    let methods: IndexMap<String, Callable> = events
        .iter()
        .map(|event| {
            let name = event.clone();
            let method = Callable::new(move |ctx, args| ctx.emit(&name, args));
            (event.clone(), method)
        })
        .collect();

    Ok(TraitFragment::new(NAME)
        .with_emits(events)
        .with_methods(methods))
}
