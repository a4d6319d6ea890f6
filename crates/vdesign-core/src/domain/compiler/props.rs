//! Type-inferring property compiler.
//!
//! `{ size: "md", items: [], onPick: fn }` becomes
//! `{ size: String("md"), items: Array(factory), onPick: Function(factory) }`.

use indexmap::IndexMap;

use crate::domain::entities::{PropDefault, PropDescriptor, PropSpec};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Map, Value};
use crate::domain::value_objects::TypeTag;

/// Infer a descriptor from one example value.
///
/// Primitive examples become literal defaults. Objects and arrays get a
/// factory that clones the example on every call, so no two instances share
/// the value. Functions get a factory returning the very same function.
pub fn infer_prop(key: &str, example: &Value) -> DomainResult<PropDescriptor> {
    let type_tag = TypeTag::of(example).ok_or_else(|| DomainError::UnsupportedPropertyType {
        key: key.to_owned(),
        kind: example.kind().to_owned(),
    })?;

    let default = if type_tag.is_reference() {
        let example = example.clone();
        PropDefault::factory(move || example.clone())
    } else {
        PropDefault::Literal(example.clone())
    };

    Ok(PropDescriptor::new(type_tag, default))
}

/// Compile a mapping of example values, preserving key order.
pub fn compile_props(examples: &Map) -> DomainResult<IndexMap<String, PropDescriptor>> {
    examples
        .iter()
        .map(|(key, example)| Ok((key.clone(), infer_prop(key, example)?)))
        .collect()
}

/// Compile the `props` field of an options bag: examples are inferred,
/// finished descriptors pass through untouched.
pub fn compile_prop_specs(
    specs: &IndexMap<String, PropSpec>,
) -> DomainResult<IndexMap<String, PropDescriptor>> {
    specs
        .iter()
        .map(|(key, spec)| {
            let desc = match spec {
                PropSpec::Example(example) => infer_prop(key, example)?,
                PropSpec::Descriptor(desc) => desc.clone(),
            };
            Ok((key.clone(), desc))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::{Callable, Instance};

    fn examples(entries: Vec<(&str, Value)>) -> Map {
        entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
    }

    #[test]
    fn primitives_keep_literal_defaults() {
        let props = compile_props(&examples(vec![
            ("foo", Value::from(0)),
            ("bar", Value::from("")),
            ("test", Value::from(false)),
        ]))
        .unwrap();

        assert_eq!(props["foo"].type_tag, TypeTag::Number);
        assert_eq!(props["bar"].type_tag, TypeTag::String);
        assert_eq!(props["test"].type_tag, TypeTag::Boolean);
        assert!(matches!(&props["foo"].default, PropDefault::Literal(v) if *v == Value::from(0)));
        assert!(matches!(&props["bar"].default, PropDefault::Literal(v) if *v == Value::from("")));
        assert!(
            matches!(&props["test"].default, PropDefault::Literal(v) if *v == Value::from(false))
        );
    }

    #[test]
    fn reference_defaults_are_fresh_per_call() {
        let props = compile_props(&examples(vec![
            ("foo", Value::object([("kk", 1)])),
            ("bar", Value::array([1, 2])),
        ]))
        .unwrap();

        assert_eq!(props["foo"].type_tag, TypeTag::Object);
        assert_eq!(props["bar"].type_tag, TypeTag::Array);
        assert!(props["foo"].default.is_factory());

        let mut first = props["bar"].default.resolve();
        let second = props["bar"].default.resolve();
        if let Value::Array(items) = &mut first {
            items.push(Value::from(3));
        }
        assert_eq!(second, Value::array([1, 2]));

        let mut object = props["foo"].default.resolve();
        if let Value::Object(map) = &mut object {
            map.insert("kk".into(), Value::from(2));
            map.insert("extra".into(), Value::from(true));
        }
        assert_eq!(object, Value::object([("kk", Value::from(2)), ("extra", Value::from(true))]));
        assert_eq!(props["foo"].default.resolve(), Value::object([("kk", 1)]));
    }

    #[test]
    fn function_default_returns_original_reference() {
        let f = Callable::new(|_, _| Value::Undefined);
        let props = compile_props(&examples(vec![("test", Value::Function(f.clone()))])).unwrap();

        assert_eq!(props["test"].type_tag, TypeTag::Function);
        let Value::Function(returned) = props["test"].default.resolve() else {
            panic!("expected a function default");
        };
        assert!(returned.ptr_eq(&f));
        assert!(returned.call(&Instance::default(), &[]).is_undefined());
    }

    #[test]
    fn undefined_example_is_rejected() {
        let err = compile_props(&examples(vec![("foo", Value::Undefined)])).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedPropertyType {
                key: "foo".into(),
                kind: "Undefined".into()
            }
        );
        assert!(err.to_string().contains("foo"));
        assert!(err.to_string().contains("Undefined"));
    }

    #[test]
    fn null_example_is_rejected() {
        let err = compile_props(&examples(vec![("foo", Value::Null)])).unwrap_err();
        assert!(err.to_string().contains("Null"));
    }

    #[test]
    fn descriptors_pass_through() {
        let mut specs = IndexMap::new();
        specs.insert(
            "size".to_string(),
            PropSpec::Descriptor(PropDescriptor::new(
                TypeTag::String,
                PropDefault::Literal(Value::from("lg")),
            )),
        );
        specs.insert("count".to_string(), PropSpec::Example(Value::from(3)));

        let props = compile_prop_specs(&specs).unwrap();
        assert_eq!(props.keys().collect::<Vec<_>>(), ["size", "count"]);
        assert_eq!(props["size"].default.resolve(), Value::from("lg"));
        assert_eq!(props["count"].type_tag, TypeTag::Number);
    }
}
