//! Rounded and shadow designs: one token prop mapped through a fixed scale.

use indexmap::IndexMap;

use crate::domain::compiler::compile_derived;
use crate::domain::designs::capitalize;
use crate::domain::designs::options::DesignOptions;
use crate::domain::entities::TraitFragment;
use crate::domain::error::DomainResult;
use crate::domain::value::{Map, Value};

pub const ROUNDED: &str = "rounded";
pub const SHADOW: &str = "shadow";

pub const ROUNDED_TOKENS: &[&str] = &["none", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "full"];
pub const SHADOW_TOKENS: &[&str] = &["none", "sm", "base", "md", "lg", "xl"];

/// The token that maps to the bare class name.
const BASE_TOKEN: &str = "base";

/// `{none: "rounded-none", base: "rounded", ...}` for `kind = "rounded"`.
pub fn scale_table(kind: &str, tokens: &[&str]) -> Map {
    tokens
        .iter()
        .map(|token| {
            let class = if *token == BASE_TOKEN {
                kind.to_owned()
            } else {
                format!("{kind}-{token}")
            };
            ((*token).to_owned(), Value::String(class))
        })
        .collect()
}

fn scale_design(
    kind: &'static str,
    tokens: &[&str],
    config: Option<&Value>,
) -> DomainResult<TraitFragment> {
    let mut defaults = Map::new();
    defaults.insert(kind.to_owned(), Value::from("none"));
    let opts = DesignOptions::merge(kind, defaults, config)?;

    let mut computed = IndexMap::new();
    let name = capitalize(kind);
    let derived = compile_derived(&name, &Value::Object(scale_table(kind, tokens)))?;
    computed.insert(name, derived);

    Ok(opts.state_fragment(&[kind])?.with_computed(computed))
}

/// Prop `rounded` (default `none`) and the `Rounded` class.
pub fn rounded(config: Option<&Value>) -> DomainResult<TraitFragment> {
    scale_design(ROUNDED, ROUNDED_TOKENS, config)
}

/// Prop `shadow` (default `none`) and the `Shadow` class.
pub fn shadow(config: Option<&Value>) -> DomainResult<TraitFragment> {
    scale_design(SHADOW, SHADOW_TOKENS, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::Instance;
    use crate::instance;

    #[test]
    fn rounded_scale() {
        let fragment = rounded(None).unwrap();
        for token in ROUNDED_TOKENS {
            let expected = if *token == "base" {
                "rounded".to_owned()
            } else {
                format!("rounded-{token}")
            };
            assert_eq!(
                fragment.computed["Rounded"].get(&instance! { "rounded" => *token }),
                Value::String(expected)
            );
        }
        assert_eq!(fragment.props["rounded"].default.resolve(), Value::from("none"));
    }

    #[test]
    fn shadow_scale() {
        let fragment = shadow(None).unwrap();
        for token in SHADOW_TOKENS {
            let expected = if *token == "base" {
                "shadow".to_owned()
            } else {
                format!("shadow-{token}")
            };
            assert_eq!(
                fragment.computed["Shadow"].get(&instance! { "shadow" => *token }),
                Value::String(expected)
            );
        }
    }

    #[test]
    fn data_source_and_custom_tokens() {
        let config = Value::object([("sourceType", "data"), ("rounded", "base")]);
        let fragment = rounded(Some(&config)).unwrap();
        let state = Instance::new(fragment.data.as_ref().unwrap().produce());
        assert_eq!(fragment.computed["Rounded"].get(&state), Value::from("rounded"));

        let config = Value::object([("sourceType", "data"), ("shadow", "foo")]);
        let fragment = shadow(Some(&config)).unwrap();
        let state = Instance::new(fragment.data.as_ref().unwrap().produce());
        assert_eq!(fragment.computed["Shadow"].get(&state), Value::from("foo"));
    }

    #[test]
    fn default_moves_into_data() {
        let fragment = shadow(Some(&Value::object([("sourceType", "data")]))).unwrap();
        assert_eq!(
            fragment.data.unwrap().produce()["shadow"],
            Value::from("none")
        );
    }
}
