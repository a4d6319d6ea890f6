//! Two-way binding design.

use indexmap::IndexMap;

use crate::domain::compiler::infer_prop;
use crate::domain::designs::options::DesignOptions;
use crate::domain::entities::{DerivedDescriptor, TraitFragment};
use crate::domain::error::DomainResult;
use crate::domain::value::{Callable, Map, Value};

pub const NAME: &str = "vModel";

/// Legacy update event.
pub const INPUT_EVENT: &str = "input";
/// Update event of the current binding protocol.
pub const UPDATE_EVENT: &str = "update:modelValue";

/// Props `value`/`modelValue` typed after the `value` sample, the
/// `VModelValue` reader and `updateVModelValue(v)`, which emits both
/// update events with `v`.
pub fn vmodel(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let mut defaults = Map::new();
    defaults.insert("value".into(), Value::from(""));
    let opts = DesignOptions::merge(NAME, defaults, config)?;

    let sample = opts.get("value");
    let mut props = IndexMap::new();
    props.insert("value".to_owned(), infer_prop("value", &sample)?);
    props.insert("modelValue".to_owned(), infer_prop("modelValue", &sample)?);

    let mut computed = IndexMap::new();
    computed.insert(
        "VModelValue".to_owned(),
        DerivedDescriptor::Getter(Callable::new(|ctx, _| ctx.get("value"))),
    );

    let mut methods = IndexMap::new();
    methods.insert(
        "updateVModelValue".to_owned(),
        Callable::new(|ctx, args| {
            let next = args.first().cloned().unwrap_or_default();
            ctx.emit(INPUT_EVENT, std::slice::from_ref(&next));
            ctx.emit(UPDATE_EVENT, std::slice::from_ref(&next));
            Value::Undefined
        }),
    );

    Ok(TraitFragment::new(NAME)
        .with_props(props)
        .with_computed(computed)
        .with_methods(methods)
        .with_emits(vec![INPUT_EVENT.to_owned(), UPDATE_EVENT.to_owned()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::Instance;
    use crate::domain::value_objects::TypeTag;
    use std::sync::{Arc, Mutex};

    #[test]
    fn value_type_follows_sample() {
        let fragment = vmodel(Some(&Value::object([("value", "")]))).unwrap();
        assert_eq!(fragment.props["value"].type_tag, TypeTag::String);
        assert_eq!(fragment.props["value"].default.resolve(), Value::from(""));
        assert_eq!(fragment.props["modelValue"].type_tag, TypeTag::String);

        let numeric = vmodel(Some(&Value::object([("value", 0)]))).unwrap();
        assert_eq!(numeric.props["modelValue"].type_tag, TypeTag::Number);
    }

    #[test]
    fn reads_current_value() {
        let fragment = vmodel(None).unwrap();
        let ctx = Instance::new(Map::from_iter([("value".to_owned(), Value::from(""))]));
        assert_eq!(fragment.computed["VModelValue"].get(&ctx), Value::from(""));
    }

    #[test]
    fn update_emits_both_events() {
        let fragment = vmodel(None).unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let ctx = Instance::default().with_emitter(move |ctx, args| {
            let event = args[0].to_string();
            if event == INPUT_EVENT {
                ctx.set("value", args[1].clone());
            }
            log.lock().unwrap().push(event);
            Value::Undefined
        });

        fragment.methods["updateVModelValue"].call(&ctx, &["updated".into()]);

        assert_eq!(fragment.computed["VModelValue"].get(&ctx), Value::from("updated"));
        assert_eq!(*seen.lock().unwrap(), [INPUT_EVENT, UPDATE_EVENT]);
        assert_eq!(fragment.emits, [INPUT_EVENT, UPDATE_EVENT]);
    }
}
