//! Counter channel.

use indexmap::IndexMap;

use crate::domain::designs::channel::{inject_fragment, provide_fragment, require_name};
use crate::domain::entities::{DataFactory, TraitFragment};
use crate::domain::error::DomainResult;
use crate::domain::value::{Callable, Instance, Map, Value};
use crate::domain::value_objects::ChannelSide;

pub const PROVIDE_NAME: &str = "provideCounter";
pub const INJECT_NAME: &str = "injectCounter";

/// Data key of the per-instance counter.
pub const COUNTER_KEY: &str = "counter";

pub const OPERATIONS: &[&str] = &["useCounter", "showCounter", "incCounter", "decCounter"];

const DESIGN: &str = "counter";

/// Apply `step` to the counter and return `(before, after)`.
fn step(ctx: &Instance, delta: f64) -> (f64, f64) {
    ctx.update(COUNTER_KEY, |slot| {
        let before = slot.as_f64().unwrap_or(0.0);
        let after = before + delta;
        *slot = Value::Number(after);
        (before, after)
    })
}

fn operations() -> IndexMap<String, Callable> {
    let ops: [(&str, Callable); 4] = [
        ("useCounter", Callable::new(|ctx, _| Value::Number(step(ctx, 1.0).0))),
        (
            "showCounter",
            Callable::new(|ctx, _| Value::Number(ctx.get(COUNTER_KEY).as_f64().unwrap_or(0.0))),
        ),
        ("incCounter", Callable::new(|ctx, _| Value::Number(step(ctx, 1.0).1))),
        ("decCounter", Callable::new(|ctx, _| Value::Number(step(ctx, -1.0).1))),
    ];
    ops.into_iter().map(|(op, f)| (op.to_owned(), f)).collect()
}

/// Provider side: `counter` starting at 0, its operations as methods, and
/// the channel exposing them under the configured prefix.
pub fn provide_counter(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let prefix = require_name(DESIGN, ChannelSide::Provide, config)?;
    let data = DataFactory::new(|| Map::from_iter([(COUNTER_KEY.to_owned(), Value::from(0))]));
    Ok(provide_fragment(PROVIDE_NAME, &prefix, operations()).with_data(data))
}

/// Injector side: the channel keys with `undefined` fallbacks.
pub fn inject_counter(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let prefix = require_name(DESIGN, ChannelSide::Inject, config)?;
    Ok(inject_fragment(INJECT_NAME, &prefix, OPERATIONS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Provided;

    fn channel() -> Provided {
        let fragment = provide_counter(Some(&Value::from("foo"))).unwrap();
        let vm = Instance::new(fragment.data.as_ref().unwrap().produce());
        fragment.provide.as_ref().unwrap().provide(&vm)
    }

    fn call(provided: &Provided, key: &str) -> Value {
        match &provided[key] {
            Value::Function(f) => f.call(&Instance::default(), &[]),
            other => panic!("{key} is {}", other.kind()),
        }
    }

    #[test]
    fn requires_name() {
        let err = provide_counter(None).unwrap_err();
        assert_eq!(err.to_string(), "counter provide config requires a non-empty string name");
        let err = inject_counter(Some(&Value::from(""))).unwrap_err();
        assert_eq!(err.to_string(), "counter inject config requires a non-empty string name");
    }

    #[test]
    fn use_counter_reads_then_increments() {
        let p = channel();
        assert_eq!(call(&p, "fooUseCounter"), Value::from(0));
        assert_eq!(call(&p, "fooUseCounter"), Value::from(1));
        assert_eq!(call(&p, "fooUseCounter"), Value::from(2));
        assert_eq!(call(&p, "fooShowCounter"), Value::from(3));
    }

    #[test]
    fn show_inc_and_dec() {
        let p = channel();
        assert_eq!(call(&p, "fooShowCounter"), Value::from(0));
        assert_eq!(call(&p, "fooIncCounter"), Value::from(1));
        assert_eq!(call(&p, "fooShowCounter"), Value::from(1));

        let p = channel();
        assert_eq!(call(&p, "fooDecCounter"), Value::from(-1));
    }

    #[test]
    fn operations_are_also_methods() {
        let fragment = provide_counter(Some(&Value::from("foo"))).unwrap();
        let vm = Instance::new(fragment.data.as_ref().unwrap().produce());
        fragment.methods["incCounter"].call(&vm, &[]);
        assert_eq!(vm.get(COUNTER_KEY), Value::from(1));
    }

    #[test]
    fn injector_keys_share_prefix() {
        let fragment = inject_counter(Some(&Value::from("foo"))).unwrap();
        assert_eq!(
            fragment.inject.keys().collect::<Vec<_>>(),
            ["fooUseCounter", "fooShowCounter", "fooIncCounter", "fooDecCounter"]
        );
    }
}
