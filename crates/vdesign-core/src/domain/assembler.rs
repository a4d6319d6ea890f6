//! Definition assembler: the top-level compile step.

use tracing::{debug, instrument};

use crate::domain::compiler::{compile_computed, compile_methods, compile_prop_specs, normalize_data};
use crate::domain::entities::{ComponentDefinition, ComponentOptions, Mixin};
use crate::domain::error::DomainResult;
use crate::domain::registry::compile_designs;

/// Compile an options bag into a definition.
///
/// `designs` fragments are placed ahead of the caller's own mixins, which
/// keep their relative order. Everything the compiler does not interpret is
/// carried over unchanged. The first error aborts the whole call.
#[instrument(skip_all, fields(designs = options.designs.as_ref().map_or(0, |d| d.len())))]
pub fn compile_definition(options: ComponentOptions) -> DomainResult<ComponentDefinition> {
    let data = options.data.as_ref().map(normalize_data).transpose()?;
    let props = compile_prop_specs(&options.props)?;
    let computed = compile_computed(&options.computed)?;
    let methods = compile_methods(&options.methods)?;

    let mut mixins: Vec<Mixin> = match &options.designs {
        Some(designs) => compile_designs(designs)?
            .into_iter()
            .map(Mixin::Design)
            .collect(),
        None => Vec::new(),
    };
    let compiled = mixins.len();
    mixins.extend(options.mixins);
    debug!(fragments = compiled, mixins = mixins.len(), "definition assembled");

    Ok(ComponentDefinition {
        data,
        props,
        computed,
        methods,
        provide: options.provide,
        inject: options.inject,
        emits: options.emits,
        mixins,
        extra: options.extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::entities::{PropDefault, PropDescriptor};
    use crate::domain::value::{Map, Value};
    use crate::domain::value_objects::TypeTag;

    #[test]
    fn fragments_precede_caller_mixins() {
        let options = ComponentOptions::new()
            .with_design("rounded", true)
            .with_mixin(Mixin::Options(Map::from_iter([("foo".to_owned(), Value::from(100))])));
        let def = compile_definition(options).unwrap();

        assert_eq!(def.mixins.len(), 2);
        assert_eq!(def.mixins[0].as_design().map(|f| f.design), Some("rounded"));
        assert_eq!(
            def.mixins[1].as_options().and_then(|m| m.get("foo")),
            Some(&Value::from(100))
        );
    }

    #[test]
    fn direct_fields_are_compiled() {
        let options = ComponentOptions::new()
            .with_data(Value::object([("open", false)]))
            .with_prop("label", "")
            .with_computed("Label", "label-$")
            .with_method("toggle", true)
            .with_extra("name", "XButton");
        let def = compile_definition(options).unwrap();

        assert!(def.data.is_some());
        assert!(def.props.contains_key("label"));
        assert_eq!(def.computed["Label"].mode_name(), "template");
        assert!(def.methods.contains_key("toggle"));
        assert_eq!(def.extra["name"], Value::from("XButton"));
        assert!(def.mixins.is_empty());
    }

    #[test]
    fn descriptors_and_emits_pass_through() {
        let options = ComponentOptions::new()
            .with_prop_descriptor(
                "size",
                PropDescriptor::new(TypeTag::String, PropDefault::Literal(Value::from("lg"))),
            )
            .with_prop("count", 0)
            .with_emit("close")
            .with_emit("open");
        let def = compile_definition(options).unwrap();

        assert_eq!(def.props.keys().collect::<Vec<_>>(), ["size", "count"]);
        assert_eq!(def.props["size"].default.resolve(), Value::from("lg"));
        assert_eq!(def.props["count"].type_tag, TypeTag::Number);
        assert_eq!(def.emits, ["close", "open"]);
    }

    #[test]
    fn first_error_aborts() {
        let options = ComponentOptions::new()
            .with_prop("bad", Value::Undefined)
            .with_design("sparkle", true);
        let err = compile_definition(options).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedPropertyType { .. }));

        let options = ComponentOptions::new().with_data(3);
        assert!(matches!(
            compile_definition(options).unwrap_err(),
            DomainError::UnsupportedDataSource { .. }
        ));
    }
}
