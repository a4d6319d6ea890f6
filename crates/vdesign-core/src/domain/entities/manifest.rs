//! Closure-free description of a compiled definition.

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::entities::definition::{ComponentDefinition, Mixin};
use crate::domain::entities::descriptor::{
    DataFactory, DerivedDescriptor, InjectDescriptor, PropDefault, PropDescriptor, ProvideFactory,
};
use crate::domain::entities::fragment::TraitFragment;
use crate::domain::value::{Callable, Instance, Value};
use crate::domain::value_objects::TypeTag;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    /// The literal default, or one value the factory yields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub factory: bool,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedEntry {
    pub name: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Members of one definition or fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemberSet {
    pub props: Vec<PropEntry>,
    pub computed: Vec<ComputedEntry>,
    pub methods: Vec<String>,
    pub emits: Vec<String>,
    pub data: Vec<String>,
    pub provide: Vec<String>,
    pub inject: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MixinEntry {
    Design {
        design: String,
        #[serde(flatten)]
        members: MemberSet,
    },
    Options {
        keys: Vec<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub members: MemberSet,
    pub mixins: Vec<MixinEntry>,
    pub extra: Vec<String>,
}

impl Manifest {
    pub fn from_definition(def: &ComponentDefinition) -> Self {
        let members = MemberSet::collect(Members {
            props: &def.props,
            computed: &def.computed,
            methods: &def.methods,
            emits: &def.emits,
            data: def.data.as_ref(),
            provide: def.provide.as_ref(),
            inject: &def.inject,
        });
        let mixins = def
            .mixins
            .iter()
            .map(|mixin| match mixin {
                Mixin::Design(fragment) => MixinEntry::Design {
                    design: fragment.design.to_owned(),
                    members: MemberSet::from_fragment(fragment),
                },
                Mixin::Options(map) => MixinEntry::Options {
                    keys: map.keys().cloned().collect(),
                },
            })
            .collect();

        Self {
            members,
            mixins,
            extra: def.extra.keys().cloned().collect(),
        }
    }

    /// Design names of the compiled fragments, in mixin order.
    pub fn design_names(&self) -> Vec<&str> {
        self.mixins
            .iter()
            .filter_map(|m| match m {
                MixinEntry::Design { design, .. } => Some(design.as_str()),
                MixinEntry::Options { .. } => None,
            })
            .collect()
    }
}

struct Members<'a> {
    props: &'a IndexMap<String, PropDescriptor>,
    computed: &'a IndexMap<String, DerivedDescriptor>,
    methods: &'a IndexMap<String, Callable>,
    emits: &'a [String],
    data: Option<&'a DataFactory>,
    provide: Option<&'a ProvideFactory>,
    inject: &'a IndexMap<String, InjectDescriptor>,
}

impl MemberSet {
    pub fn from_fragment(fragment: &TraitFragment) -> Self {
        Self::collect(Members {
            props: &fragment.props,
            computed: &fragment.computed,
            methods: &fragment.methods,
            emits: &fragment.emits,
            data: fragment.data.as_ref(),
            provide: fragment.provide.as_ref(),
            inject: &fragment.inject,
        })
    }

    fn collect(m: Members<'_>) -> Self {
        let data = m.data.map(DataFactory::produce).unwrap_or_default();
        // provide keys are only known once a providing instance exists
        let provide: Vec<String> = m
            .provide
            .map(|factory| {
                factory
                    .provide(&Instance::new(data.clone()))
                    .into_keys()
                    .collect()
            })
            .unwrap_or_default();

        Self {
            props: m
                .props
                .iter()
                .map(|(name, desc)| PropEntry {
                    name: name.clone(),
                    type_tag: desc.type_tag,
                    default: sample_default(&desc.default),
                    factory: desc.default.is_factory(),
                    required: desc.required,
                })
                .collect(),
            computed: m
                .computed
                .iter()
                .map(|(name, desc)| ComputedEntry {
                    name: name.clone(),
                    mode: desc.mode_name().to_owned(),
                    source: desc.source().map(str::to_owned),
                })
                .collect(),
            methods: m.methods.keys().cloned().collect(),
            emits: m.emits.to_vec(),
            data: data.into_keys().collect(),
            provide,
            inject: m.inject.keys().cloned().collect(),
        }
    }
}

fn sample_default(default: &PropDefault) -> Option<Value> {
    match default.resolve() {
        Value::Undefined => None,
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::compile_designs;
    use crate::domain::value::Map;

    #[test]
    fn fragment_members_are_listed_in_order() {
        let mut designs = Map::new();
        designs.insert("provideCounter".into(), Value::from("foo"));
        let fragments = compile_designs(&designs).unwrap();

        let members = MemberSet::from_fragment(&fragments[0]);
        assert_eq!(members.data, ["counter"]);
        assert_eq!(
            members.provide,
            ["fooUseCounter", "fooShowCounter", "fooIncCounter", "fooDecCounter"]
        );
        assert_eq!(members.methods.len(), 4);
    }

    #[test]
    fn definition_manifest_lists_mixins() {
        let def = ComponentDefinition {
            mixins: vec![
                Mixin::Design(TraitFragment::new("rounded")),
                Mixin::Options(Map::from_iter([("foo".to_owned(), Value::from(100))])),
            ],
            ..Default::default()
        };
        let manifest = Manifest::from_definition(&def);
        assert_eq!(manifest.design_names(), ["rounded"]);
        assert_eq!(
            manifest.mixins[1],
            MixinEntry::Options {
                keys: vec!["foo".into()]
            }
        );
    }
}
