//! Color design.

use indexmap::IndexMap;

use crate::domain::compiler::compile_derived;
use crate::domain::designs::options::DesignOptions;
use crate::domain::entities::{DerivedDescriptor, TraitFragment};
use crate::domain::error::DomainResult;
use crate::domain::value::{Callable, Map, Value};

pub const NAME: &str = "color";

const STATE_KEYS: &[&str] = &["color", "light", "outline"];

fn defaults() -> Map {
    let mut map = Map::new();
    map.insert("color".into(), Value::from(""));
    map.insert("light".into(), Value::from(false));
    map.insert("outline".into(), Value::from(false));
    map
}

/// Props `color`, `light` and `outline` plus the `Color` class string.
///
/// Options: the three state keys override their defaults, `presets`
/// replaces the formatter with a lookup table, `inject` names a host prefix
/// (`btn` gives `btn-primary text-white ...`) and `sourceType` moves the
/// state into data.
pub fn color(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let opts = DesignOptions::merge(NAME, defaults(), config)?;

    let derived = match opts.presets()? {
        Some(presets) => compile_derived("Color", &Value::Object(presets))?,
        None => DerivedDescriptor::Getter(formatter(opts.string("inject"))),
    };

    let mut computed = IndexMap::new();
    computed.insert("Color".to_owned(), derived);
    Ok(opts.state_fragment(STATE_KEYS)?.with_computed(computed))
}

fn formatter(prefix: Option<String>) -> Callable {
    Callable::new(move |ctx, _| {
        let color = ctx.get("color");
        let classes = if ctx.get("outline").is_truthy() {
            format!("text-{color} border border-{color} bg-transparent")
        } else if ctx.get("light").is_truthy() {
            format!("text-{color} bg-{color} bg-opacity-10")
        } else {
            format!("text-white bg-{color} bg-opacity-100")
        };
        match &prefix {
            Some(prefix) => Value::String(format!("{prefix}-{color} {classes}")),
            None => Value::String(classes),
        }
    })
}
