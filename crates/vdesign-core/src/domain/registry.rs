//! Design registry.
//!
//! Each built-in design is described exactly once by its [`DesignDef`] in
//! [`DESIGN_REGISTRY`]. The set is closed: there is no runtime registration.
//!
//! # Resolving a `designs` mapping
//!
//! ```text
//! { open: ["rounded", "shadow"], color: { light: true }, emits: ["click"] }
//!     │
//!     ├─ open   -> rounded(default), shadow(default)   (spliced in place)
//!     ├─ color  -> color({ light: true })
//!     └─ emits  -> emits(["click"])
//! ```
//!
//! `true` enables a design with its defaults; `false`, `null` and
//! `undefined` disable it. Anything else is handed to the generator, which
//! decides whether it accepts that kind of configuration.

use tracing::{debug, instrument};

use crate::domain::designs;
use crate::domain::entities::TraitFragment;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Map, Value};

/// Key that enables a list of designs with their defaults.
pub const OPEN_KEY: &str = "open";

/// What a design accepts besides `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigShape {
    /// A mapping merged over the built-in defaults.
    Options,
    /// A list of event names.
    EventList,
    /// A namespace prefix string.
    Namespace,
}

impl ConfigShape {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Options => "options",
            Self::EventList => "event list",
            Self::Namespace => "namespace",
        }
    }
}

pub type Generator = fn(Option<&Value>) -> DomainResult<TraitFragment>;

/// Everything the registry knows about one design.
#[derive(Debug, Clone, Copy)]
pub struct DesignDef {
    /// Key under `designs`.
    pub name: &'static str,
    pub config: ConfigShape,
    pub generate: Generator,
    /// One-line description for tooling.
    pub summary: &'static str,
}

/// Single source of truth for the built-in designs.
pub static DESIGN_REGISTRY: &[DesignDef] = &[
    DesignDef {
        name: "color",
        config: ConfigShape::Options,
        generate: designs::color,
        summary: "color/light/outline props with a Color class string",
    },
    DesignDef {
        name: "rounded",
        config: ConfigShape::Options,
        generate: designs::rounded,
        summary: "rounded token prop mapped to rounded-* classes",
    },
    DesignDef {
        name: "shadow",
        config: ConfigShape::Options,
        generate: designs::shadow,
        summary: "shadow token prop mapped to shadow-* classes",
    },
    DesignDef {
        name: "size",
        config: ConfigShape::Options,
        generate: designs::size,
        summary: "size token prop mapped through caller presets",
    },
    DesignDef {
        name: "flex",
        config: ConfigShape::Options,
        generate: designs::flex,
        summary: "justify/align/direction props with flex classes",
    },
    DesignDef {
        name: "vModel",
        config: ConfigShape::Options,
        generate: designs::vmodel,
        summary: "value/modelValue props and updateVModelValue",
    },
    DesignDef {
        name: "emits",
        config: ConfigShape::EventList,
        generate: designs::emits,
        summary: "declared events with same-named emitter methods",
    },
    DesignDef {
        name: "provideEffects",
        config: ConfigShape::Namespace,
        generate: designs::provide_effects,
        summary: "effect registry exposed to descendants",
    },
    DesignDef {
        name: "injectEffects",
        config: ConfigShape::Namespace,
        generate: designs::inject_effects,
        summary: "effect registry channel from an ancestor",
    },
    DesignDef {
        name: "provideCounter",
        config: ConfigShape::Namespace,
        generate: designs::provide_counter,
        summary: "counter exposed to descendants",
    },
    DesignDef {
        name: "injectCounter",
        config: ConfigShape::Namespace,
        generate: designs::inject_counter,
        summary: "counter channel from an ancestor",
    },
];

pub fn find_design(name: &str) -> Option<&'static DesignDef> {
    DESIGN_REGISTRY.iter().find(|def| def.name == name)
}

/// Registered names, in registry order.
pub fn design_names() -> impl Iterator<Item = &'static str> {
    DESIGN_REGISTRY.iter().map(|def| def.name)
}

/// Generate one design by name. `None` means built-in defaults.
pub fn generate(name: &str, config: Option<&Value>) -> DomainResult<TraitFragment> {
    let def = find_design(name).ok_or_else(|| DomainError::UnknownDesign {
        name: name.to_owned(),
    })?;
    (def.generate)(config)
}

/// Resolve a `designs` mapping into fragments, in declaration order.
///
/// Fragments are never merged with each other; that is left to mixin
/// composition downstream. The first failing entry aborts the whole call.
#[instrument(skip_all, fields(entries = designs.len()))]
pub fn compile_designs(designs: &Map) -> DomainResult<Vec<TraitFragment>> {
    let mut fragments = Vec::with_capacity(designs.len());

    for (name, config) in designs {
        if name == OPEN_KEY {
            let Value::Array(list) = config else {
                return Err(DomainError::InvalidDesignConfig {
                    design: OPEN_KEY.to_owned(),
                    kind: config.kind().to_owned(),
                });
            };
            for entry in list {
                let entry = entry.to_string();
                debug!(design = %entry, "opening design with defaults");
                fragments.push(generate(&entry, None)?);
            }
            continue;
        }

        let config = match config {
            Value::Bool(false) | Value::Null | Value::Undefined => {
                // still reject names outside the registry
                if find_design(name).is_none() {
                    return Err(DomainError::UnknownDesign { name: name.clone() });
                }
                debug!(design = %name, "design disabled");
                continue;
            }
            Value::Bool(true) => None,
            other => Some(other),
        };

        debug!(design = %name, defaults = config.is_none(), "compiling design");
        fragments.push(generate(name, config)?);
    }

    Ok(fragments)
}

/// Assert that the registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for (i, def) in DESIGN_REGISTRY.iter().enumerate() {
        assert_ne!(def.name, OPEN_KEY, "'{OPEN_KEY}' is reserved");
        assert!(
            DESIGN_REGISTRY[..i].iter().all(|other| other.name != def.name),
            "design '{}' is registered twice",
            def.name
        );
        if def.config == ConfigShape::Options || def.config == ConfigShape::EventList {
            let fragment = (def.generate)(None)
                .unwrap_or_else(|e| panic!("design '{}' has no usable defaults: {e}", def.name));
            assert_eq!(fragment.design, def.name, "fragment design name mismatch");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn designs(entries: Vec<(&str, Value)>) -> Map {
        entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
    }

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn open_expands_in_list_order() {
        let fragments =
            compile_designs(&designs(vec![("open", Value::array(["rounded", "shadow", "color"]))]))
                .unwrap();
        let names: Vec<_> = fragments.iter().map(|f| f.design).collect();
        assert_eq!(names, ["rounded", "shadow", "color"]);

        let rounded = &fragments[0];
        assert_eq!(rounded.props["rounded"].default.resolve(), Value::from("none"));
        assert!(rounded.computed.contains_key("Rounded"));
        assert!(fragments[2].computed.contains_key("Color"));
    }

    #[test]
    fn open_is_spliced_at_its_position() {
        let fragments = compile_designs(&designs(vec![
            ("flex", Value::from(true)),
            ("open", Value::array(["shadow"])),
            ("emits", Value::array(["click"])),
        ]))
        .unwrap();
        let names: Vec<_> = fragments.iter().map(|f| f.design).collect();
        assert_eq!(names, ["flex", "shadow", "emits"]);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = compile_designs(&designs(vec![("sparkle", Value::from(true))])).unwrap_err();
        assert_eq!(err, DomainError::UnknownDesign { name: "sparkle".into() });

        let err = compile_designs(&designs(vec![("open", Value::array(["sparkle"]))])).unwrap_err();
        assert_eq!(err, DomainError::UnknownDesign { name: "sparkle".into() });

        let err = compile_designs(&designs(vec![("sparkle", Value::from(false))])).unwrap_err();
        assert!(matches!(err, DomainError::UnknownDesign { .. }));
    }

    #[test]
    fn open_requires_a_list() {
        let err = compile_designs(&designs(vec![("open", Value::from("rounded"))])).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidDesignConfig {
                design: "open".into(),
                kind: "String".into()
            }
        );
    }

    #[test]
    fn disabled_designs_produce_nothing() {
        let fragments = compile_designs(&designs(vec![
            ("color", Value::from(false)),
            ("rounded", Value::Null),
            ("shadow", Value::from(true)),
        ]))
        .unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].design, "shadow");
    }

    #[test]
    fn mapping_overrides_only_named_keys() {
        let fragments =
            compile_designs(&designs(vec![("color", Value::object([("light", true)]))])).unwrap();
        let color = &fragments[0];
        assert_eq!(color.props["light"].default.resolve(), Value::from(true));
        assert_eq!(color.props["color"].default.resolve(), Value::from(""));
        assert_eq!(color.props["outline"].default.resolve(), Value::from(false));
    }

    #[test]
    fn strings_and_arrays_reach_their_generators() {
        let fragments = compile_designs(&designs(vec![
            ("provideCounter", Value::from("foo")),
            ("emits", Value::array(["click", "open"])),
        ]))
        .unwrap();
        assert!(fragments[0].provide.is_some());
        assert_eq!(fragments[1].emits, ["click", "open"]);
    }

    #[test]
    fn channel_designs_need_a_name() {
        let err = compile_designs(&designs(vec![("injectEffects", Value::from(true))])).unwrap_err();
        assert!(matches!(err, DomainError::MissingOrInvalidName { .. }));
    }

    #[test]
    fn option_designs_reject_other_kinds() {
        let err = compile_designs(&designs(vec![("rounded", Value::from(3))])).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidDesignConfig {
                design: "rounded".into(),
                kind: "Number".into()
            }
        );
    }
}
