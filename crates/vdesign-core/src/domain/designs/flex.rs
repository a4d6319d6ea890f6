//! Flex layout design.

use indexmap::IndexMap;

use crate::domain::compiler::compile_derived;
use crate::domain::designs::capitalize;
use crate::domain::designs::options::DesignOptions;
use crate::domain::entities::TraitFragment;
use crate::domain::error::DomainResult;
use crate::domain::value::{Map, Value};

pub const NAME: &str = "flex";

/// `(prop, default, token -> class)` for each flex axis.
const AXES: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "justify",
        "start",
        &[
            ("end", "justify-end"),
            ("start", "justify-start"),
            ("center", "justify-center"),
            ("around", "justify-around"),
            ("evenly", "justify-evenly"),
            ("between", "justify-between"),
        ],
    ),
    (
        "align",
        "stretch",
        &[
            ("end", "items-flex-end"),
            ("center", "items-center"),
            ("stretch", "items-stretch"),
            ("start", "items-flex-start"),
            ("baseline", "items-baseline"),
        ],
    ),
    (
        "direction",
        "row",
        &[
            ("row", "flex-row"),
            ("col", "flex-col"),
            ("row-reverse", "flex-row-reverse"),
            ("col-reverse", "flex-col-reverse"),
        ],
    ),
];

/// Props `justify`, `align`, `direction` with the `Justify`, `Align` and
/// `Direction` classes.
pub fn flex(config: Option<&Value>) -> DomainResult<TraitFragment> {
    let defaults: Map = AXES
        .iter()
        .map(|(prop, default, _)| ((*prop).to_owned(), Value::from(*default)))
        .collect();
    let opts = DesignOptions::merge(NAME, defaults, config)?;

    let mut computed = IndexMap::new();
    for (prop, _, table) in AXES {
        let name = capitalize(prop);
        let table = Value::object(table.iter().copied());
        computed.insert(name.clone(), compile_derived(&name, &table)?);
    }

    let props: Vec<&str> = AXES.iter().map(|(prop, _, _)| *prop).collect();
    Ok(opts.state_fragment(&props)?.with_computed(computed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance;

    #[test]
    fn overrides_set_prop_defaults() {
        let config = Value::object([("justify", "center"), ("align", "center"), ("direction", "col")]);
        let fragment = flex(Some(&config)).unwrap();
        assert_eq!(fragment.props["justify"].default.resolve(), Value::from("center"));
        assert_eq!(fragment.props["align"].default.resolve(), Value::from("center"));
        assert_eq!(fragment.props["direction"].default.resolve(), Value::from("col"));
    }

    #[test]
    fn every_axis_maps_its_tokens() {
        let fragment = flex(None).unwrap();
        for (prop, _, table) in AXES {
            let derived = &fragment.computed[capitalize(prop).as_str()];
            for (token, class) in *table {
                assert_eq!(derived.get(&instance! { *prop => *token }), Value::from(*class));
            }
            assert_eq!(derived.get(&instance! { *prop => "wrap" }), Value::from("wrap"));
        }
    }

    #[test]
    fn defaults() {
        let fragment = flex(None).unwrap();
        assert_eq!(fragment.props["justify"].default.resolve(), Value::from("start"));
        assert_eq!(fragment.props["align"].default.resolve(), Value::from("stretch"));
        assert_eq!(fragment.props["direction"].default.resolve(), Value::from("row"));
    }
}
