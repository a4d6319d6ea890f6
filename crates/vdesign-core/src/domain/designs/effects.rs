//! Effect registry channel.
//!
//! The provider keeps `name -> callback` under the `effects` data key.
//! Descendants reach it through `<prefix>TrackEffect`, `<prefix>TriggerEffect`
//! and friends.

use indexmap::IndexMap;

use crate::domain::designs::channel::{inject_fragment, provide_fragment, require_name};
use crate::domain::entities::{DataFactory, TraitFragment};
use crate::domain::error::DomainResult;
use crate::domain::value::{Callable, Instance, Map, Value};
use crate::domain::value_objects::ChannelSide;

pub const PROVIDE_NAME: &str = "provideEffects";
pub const INJECT_NAME: &str = "injectEffects";

/// Data key of the per-instance registry.
pub const EFFECTS_KEY: &str = "effects";

pub const OPERATIONS: &[&str] = &[
    "trackEffect",
    "hasEffect",
    "showEffect",
    "sizeEffects",
    "triggerEffect",
    "clearEffects",
    "destoryEffect",
];

const DESIGN: &str = "effect";

fn effect_name(args: &[Value]) -> String {
    args.first().map(Value::to_string).unwrap_or_default()
}

/// Run `f` on the registry under one write. A missing or clobbered registry
/// is replaced by an empty one.
fn with_registry<R>(ctx: &Instance, f: impl FnOnce(&mut Map) -> R) -> R {
    ctx.update(EFFECTS_KEY, |slot| {
        let mut registry = match std::mem::take(slot) {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let out = f(&mut registry);
        *slot = Value::Object(registry);
        out
    })
}

fn lookup(ctx: &Instance, name: &str) -> Value {
    match ctx.get(EFFECTS_KEY) {
        Value::Object(registry) => registry.get(name).cloned().unwrap_or_default(),
        _ => Value::Undefined,
    }
}

fn operations() -> IndexMap<String, Callable> {
    let ops: [(&str, Callable); 7] = [
        (
            "trackEffect",
            Callable::new(|ctx, args| {
                let name = effect_name(args);
                let effect = args.get(1).cloned().unwrap_or_default();
                with_registry(ctx, |registry| registry.insert(name, effect));
                Value::Undefined
            }),
        ),
        (
            "hasEffect",
            Callable::new(|ctx, args| {
                let name = effect_name(args);
                Value::Bool(with_registry(ctx, |registry| registry.contains_key(&name)))
            }),
        ),
        (
            "showEffect",
            Callable::new(|ctx, args| lookup(ctx, &effect_name(args))),
        ),
        (
            "sizeEffects",
            Callable::new(|ctx, _| {
                let size = with_registry(ctx, |registry| registry.len());
                Value::Number(size as f64)
            }),
        ),
        (
            "triggerEffect",
            Callable::new(|ctx, args| match lookup(ctx, &effect_name(args)) {
                Value::Function(effect) => effect.call(ctx, args.get(1..).unwrap_or_default()),
                _ => Value::Undefined,
            }),
        ),
        (
            "clearEffects",
            Callable::new(|ctx, _| {
                ctx.set(EFFECTS_KEY, Map::new());
                Value::Undefined
            }),
        ),
        (
            "destoryEffect",
            Callable::new(|ctx, args| {
                let name = effect_name(args);
                with_registry(ctx, |registry| registry.shift_remove(&name));
                Value::Undefined
            }),
        ),
    ];
    ops.into_iter().map(|(op, f)| (op.to_owned(), f)).collect()
}

/// Provider side: the registry data, its operations as methods, and the
/// channel exposing them under the configured prefix.
pub fn provide_effects(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let prefix = require_name(DESIGN, ChannelSide::Provide, config)?;
    let data = DataFactory::new(|| Map::from_iter([(EFFECTS_KEY.to_owned(), Value::Object(Map::new()))]));
    Ok(provide_fragment(PROVIDE_NAME, &prefix, operations()).with_data(data))
}

/// Injector side: the channel keys with `undefined` fallbacks.
pub fn inject_effects(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let prefix = require_name(DESIGN, ChannelSide::Inject, config)?;
    Ok(inject_fragment(INJECT_NAME, &prefix, OPERATIONS))
}
