//! Data-source normalizer.

use crate::domain::entities::DataFactory;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Instance, Value};

/// Normalize a data source into a factory.
///
/// A mapping is wrapped in a factory that clones it on every call. A
/// function is already a factory; it runs against a fresh instance and a
/// non-mapping result is replaced by an empty mapping.
pub fn normalize_data(source: &Value) -> DomainResult<DataFactory> {
    match source {
        Value::Object(map) => {
            let map = map.clone();
            Ok(DataFactory::new(move || map.clone()))
        }
        Value::Function(f) => {
            let f = f.clone();
            Ok(DataFactory::new(move || match f.call(&Instance::default(), &[]) {
                Value::Object(map) => map,
                other => {
                    tracing::warn!(kind = other.kind(), "data function did not return a mapping");
                    Default::default()
                }
            }))
        }
        other => Err(DomainError::UnsupportedDataSource {
            kind: other.kind().to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::Map;

    #[test]
    fn mapping_is_reproduced_on_every_call() {
        let factory = normalize_data(&Value::object([("count", 0)])).unwrap();

        let mut first = factory.produce();
        first.insert("count".into(), Value::from(5));
        assert_eq!(factory.produce().get("count"), Some(&Value::from(0)));
    }

    #[test]
    fn function_is_used_as_factory() {
        let factory =
            normalize_data(&Value::function(|_, _| Value::object([("open", false)]))).unwrap();
        assert_eq!(factory.produce().get("open"), Some(&Value::from(false)));
    }

    #[test]
    fn function_with_non_mapping_result_yields_empty() {
        let factory = normalize_data(&Value::function(|_, _| Value::from(3))).unwrap();
        assert_eq!(factory.produce(), Map::new());
    }

    #[test]
    fn other_sources_are_rejected() {
        for (source, kind) in [
            (Value::from(1), "Number"),
            (Value::from("x"), "String"),
            (Value::array([1]), "Array"),
            (Value::Null, "Null"),
        ] {
            assert_eq!(
                normalize_data(&source).unwrap_err(),
                DomainError::UnsupportedDataSource { kind: kind.into() }
            );
        }
    }
}
