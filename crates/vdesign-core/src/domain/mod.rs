//! Core domain layer for vdesign.
//!
//! Pure compile logic: no I/O and no global state. Compiled closures are
//! `Send + Sync` and receive their evaluation context explicitly.
//!
//! ```text
//! ComponentOptions ──► assembler ──┬─► compiler::{props, computed, methods, data}
//!                                  └─► registry ──► designs::* ──► compiler::*
//!                                          │
//!                                          ▼
//!                                  ComponentDefinition (+ Manifest)
//! ```

pub mod assembler;
pub mod compiler;
pub mod designs;
pub mod entities;
pub mod error;
pub mod registry;
pub mod value;
pub mod value_objects;

pub use assembler::compile_definition;
pub use entities::{
    ComponentDefinition, ComponentOptions, DataFactory, DerivedDescriptor, InjectDescriptor,
    Manifest, Mixin, PropDefault, PropDescriptor, PropSpec, Provided, ProvideFactory,
    TraitFragment,
};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use registry::{DESIGN_REGISTRY, DesignDef, compile_designs};
pub use value::{Callable, Instance, Map, Value};
pub use value_objects::{ChannelSide, SourceKind, TypeTag};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance;

    // ========================================================================
    // Inject resolution
    // ========================================================================

    fn options(designs: Vec<(&str, Value)>) -> ComponentOptions {
        designs
            .into_iter()
            .fold(ComponentOptions::new(), |o, (name, config)| o.with_design(name, config))
    }

    #[test]
    fn descendant_reaches_ancestor_counter() {
        let parent = compile_definition(options(vec![("provideCounter", "tabs".into())])).unwrap();
        let child = compile_definition(options(vec![("injectCounter", "tabs".into())])).unwrap();

        let parent_vm = parent.instantiate(Map::new());
        let provided = parent.provider().unwrap().provide(&parent_vm);

        let injected = child.resolve_inject(&[&provided]);
        let Value::Function(use_counter) = &injected["tabsUseCounter"] else {
            panic!("channel not resolved");
        };
        let child_vm = Instance::default();
        assert_eq!(use_counter.call(&child_vm, &[]), Value::from(0));
        assert_eq!(use_counter.call(&child_vm, &[]), Value::from(1));
        assert_eq!(parent_vm.get("counter"), Value::from(2));
    }

    #[test]
    fn unprovided_keys_fall_back_to_undefined() {
        let child = compile_definition(options(vec![("injectEffects", "form".into())])).unwrap();
        let injected = child.resolve_inject(&[]);
        assert_eq!(injected.len(), 7);
        assert!(injected.values().all(Value::is_undefined));
    }

    #[test]
    fn nearest_ancestor_wins() {
        let near = Provided::from_iter([("formShowCounter".to_owned(), Value::from("near"))]);
        let far = Provided::from_iter([("formShowCounter".to_owned(), Value::from("far"))]);
        let child = compile_definition(options(vec![("injectCounter", "form".into())])).unwrap();

        let injected = child.resolve_inject(&[&near, &far]);
        assert_eq!(injected["formShowCounter"], Value::from("near"));
    }

    // ========================================================================
    // Definition composition
    // ========================================================================

    #[test]
    fn own_members_shadow_fragment_members() {
        let opts = options(vec![("color", true.into())]).with_computed("Color", "custom-$");
        let def = compile_definition(opts).unwrap();
        let vm = instance! { "color" => "primary" };
        assert_eq!(def.derived("Color").unwrap().get(&vm), Value::from("custom-primary"));
    }

    #[test]
    fn initial_state_merges_fragment_defaults() {
        let def = compile_definition(
            options(vec![("rounded", true.into()), ("provideCounter", "c".into())])
                .with_prop("label", "ok"),
        )
        .unwrap();
        let state = def.initial_state();
        assert_eq!(state["rounded"], Value::from("none"));
        assert_eq!(state["counter"], Value::from(0));
        assert_eq!(state["label"], Value::from("ok"));
    }

    #[test]
    fn instances_do_not_share_reference_defaults() {
        let def = compile_definition(ComponentOptions::new().with_prop("items", Value::array([1])))
            .unwrap();
        let a = def.instantiate(Map::new());
        let b = def.instantiate(Map::new());
        a.update("items", |v| {
            if let Value::Array(items) = v {
                items.push(Value::from(2));
            }
        });
        assert_eq!(b.get("items"), Value::array([1]));
    }
}
