//! Instance-method compiler.
//!
//! Methods are either author functions (kept verbatim) or named recipes from
//! a closed table, enabled with `true`.

use indexmap::IndexMap;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Callable, Map, Value};

/// A built-in method recipe.
#[derive(Debug, Clone, Copy)]
pub struct MethodRecipe {
    pub name: &'static str,
    pub summary: &'static str,
    build: fn() -> Callable,
}

impl MethodRecipe {
    pub fn build(&self) -> Callable {
        (self.build)()
    }
}

pub static METHOD_RECIPES: &[MethodRecipe] = &[MethodRecipe {
    name: "toggle",
    summary: "toggle(prop, value?) flips a boolean property or sets it explicitly",
    build: toggle,
}];

pub fn find_recipe(name: &str) -> Option<&'static MethodRecipe> {
    METHOD_RECIPES.iter().find(|r| r.name == name)
}

/// `toggle(prop, value?)`: with an explicit value, assign it; otherwise
/// replace the property with its logical negation. Returns the new value.
///
/// The property is named at call time, so one compiled method serves every
/// boolean on the instance.
pub fn toggle() -> Callable {
    Callable::new(|ctx, args| {
        let prop = args.first().map(Value::to_string).unwrap_or_default();
        match args.get(1) {
            Some(explicit) if !explicit.is_undefined() => {
                ctx.set(prop, explicit.clone());
                explicit.clone()
            }
            _ => ctx.update(&prop, |slot| {
                *slot = Value::Bool(!slot.is_truthy());
                slot.clone()
            }),
        }
    })
}

/// Compile one method spec.
pub fn compile_method(key: &str, spec: &Value) -> DomainResult<Callable> {
    match spec {
        Value::Function(f) => Ok(f.clone()),
        Value::Bool(true) => find_recipe(key)
            .map(MethodRecipe::build)
            .ok_or_else(|| DomainError::UnknownMethodRecipe {
                key: key.to_owned(),
            }),
        other => Err(DomainError::UnsupportedMethodConfig {
            key: key.to_owned(),
            kind: other.kind().to_owned(),
        }),
    }
}

pub fn compile_methods(specs: &Map) -> DomainResult<IndexMap<String, Callable>> {
    specs
        .iter()
        .map(|(key, spec)| Ok((key.clone(), compile_method(key, spec)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance;

    fn methods(entries: Vec<(&str, Value)>) -> IndexMap<String, Callable> {
        let specs: Map = entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect();
        compile_methods(&specs).unwrap()
    }

    #[test]
    fn toggle_flips_and_assigns() {
        let m = methods(vec![("toggle", Value::from(true))]);
        let vm = instance! { "status" => false };

        m["toggle"].call(&vm, &["status".into()]);
        assert_eq!(vm.get("status"), Value::from(true));

        m["toggle"].call(&vm, &["status".into()]);
        assert_eq!(vm.get("status"), Value::from(false));

        let returned = m["toggle"].call(&vm, &["status".into(), false.into()]);
        assert_eq!(vm.get("status"), Value::from(false));
        assert_eq!(returned, Value::from(false));
    }

    #[test]
    fn toggle_is_not_bound_to_one_property() {
        let m = methods(vec![("toggle", Value::from(true))]);
        let vm = instance! { "open" => false, "busy" => true };

        assert_eq!(m["toggle"].call(&vm, &["open".into()]), Value::from(true));
        assert_eq!(m["toggle"].call(&vm, &["busy".into()]), Value::from(false));
        // missing properties start out undefined, which negates to true
        assert_eq!(m["toggle"].call(&vm, &["fresh".into()]), Value::from(true));
    }

    #[test]
    fn function_methods_pass_through() {
        let f = Callable::new(|ctx, _| ctx.get("n"));
        let m = methods(vec![("read", Value::Function(f.clone()))]);
        assert!(m["read"].ptr_eq(&f));
    }

    #[test]
    fn unknown_recipe_is_rejected() {
        let err = compile_method("shuffle", &Value::from(true)).unwrap_err();
        assert_eq!(err, DomainError::UnknownMethodRecipe { key: "shuffle".into() });
    }

    #[test]
    fn other_configs_are_rejected() {
        let err = compile_method("toggle", &Value::from("yes")).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnsupportedMethodConfig {
                key: "toggle".into(),
                kind: "String".into()
            }
        );
        assert!(compile_method("toggle", &Value::from(false)).is_err());
    }
}
