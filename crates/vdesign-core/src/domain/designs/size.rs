//! Size design.

use indexmap::IndexMap;

use crate::domain::compiler::compile_derived;
use crate::domain::designs::options::DesignOptions;
use crate::domain::entities::TraitFragment;
use crate::domain::error::DomainResult;
use crate::domain::value::{Map, Value};

pub const NAME: &str = "size";

/// Prop `size` (default `md`) and a `Size` lookup over the caller's
/// `presets`. Without presets every token passes through unchanged.
pub fn size(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let mut defaults = Map::new();
    defaults.insert("size".into(), Value::from("md"));
    let opts = DesignOptions::merge(NAME, defaults, config)?;

    let presets = opts.presets()?.unwrap_or_default();
    let mut computed = IndexMap::new();
    computed.insert("Size".to_owned(), compile_derived("Size", &Value::Object(presets))?);

    Ok(opts.state_fragment(&["size"])?.with_computed(computed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::value::Instance;
    use crate::instance;

    fn presets() -> Value {
        Value::object([
            ("xs", "size-xs"),
            ("sm", "size-sm"),
            ("md", "size-md"),
            ("lg", "size-lg"),
        ])
    }

    #[test]
    fn non_mapping_presets_are_rejected() {
        let err = size(Some(&Value::object([("presets", 1)]))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPresetType { ref design, .. } if design == "size"));
    }

    #[test]
    fn presets_map_tokens() {
        let fragment = size(Some(&Value::object([("presets", presets())]))).unwrap();
        for token in ["xs", "sm", "md", "lg"] {
            assert_eq!(
                fragment.computed["Size"].get(&instance! { "size" => token }),
                Value::String(format!("size-{token}"))
            );
        }
        assert_eq!(fragment.props["size"].default.resolve(), Value::from("md"));
    }

    #[test]
    fn data_source_with_and_without_presets() {
        let config = Value::object([
            ("sourceType", Value::from("data")),
            ("presets", presets()),
            ("size", Value::from("lg")),
        ]);
        let fragment = size(Some(&config)).unwrap();
        let state = Instance::new(fragment.data.as_ref().unwrap().produce());
        assert_eq!(fragment.computed["Size"].get(&state), Value::from("size-lg"));

        let config = Value::object([("sourceType", "data"), ("size", "foo")]);
        let fragment = size(Some(&config)).unwrap();
        let state = Instance::new(fragment.data.as_ref().unwrap().produce());
        assert_eq!(fragment.computed["Size"].get(&state), Value::from("foo"));
    }
}
