//! Component options (author input) and component definitions (compiled
//! output handed to the host framework).

use indexmap::IndexMap;

use crate::domain::entities::descriptor::{
    DataFactory, DerivedDescriptor, InjectDescriptor, PropDefault, PropDescriptor, Provided,
    ProvideFactory,
};
use crate::domain::entities::fragment::TraitFragment;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::{Callable, Instance, Map, Value};
use crate::domain::value_objects::TypeTag;

// ── Inputs ────────────────────────────────────────────────────────────────────

/// One entry of the `props` field: example shorthand or a finished descriptor.
#[derive(Debug, Clone)]
pub enum PropSpec {
    Example(Value),
    Descriptor(PropDescriptor),
}

/// An entry of the mixin list.
#[derive(Debug, Clone)]
pub enum Mixin {
    /// Fragment compiled from a design.
    Design(TraitFragment),
    /// Caller-supplied raw options, passed through untouched.
    Options(Map),
}

impl Mixin {
    pub fn as_design(&self) -> Option<&TraitFragment> {
        match self {
            Self::Design(fragment) => Some(fragment),
            Self::Options(_) => None,
        }
    }

    pub fn as_options(&self) -> Option<&Map> {
        match self {
            Self::Options(map) => Some(map),
            Self::Design(_) => None,
        }
    }
}

/// The author's options bag.
#[derive(Debug, Clone, Default)]
pub struct ComponentOptions {
    pub data: Option<Value>,
    pub props: IndexMap<String, PropSpec>,
    pub computed: Map,
    pub methods: Map,
    pub designs: Option<Map>,
    pub mixins: Vec<Mixin>,
    pub emits: Vec<String>,
    pub provide: Option<ProvideFactory>,
    pub inject: IndexMap<String, InjectDescriptor>,
    /// Fields the compiler does not interpret.
    pub extra: Map,
}

impl ComponentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Declare a prop by example value.
    pub fn with_prop(mut self, name: impl Into<String>, example: impl Into<Value>) -> Self {
        self.props
            .insert(name.into(), PropSpec::Example(example.into()));
        self
    }

    pub fn with_prop_descriptor(mut self, name: impl Into<String>, desc: PropDescriptor) -> Self {
        self.props.insert(name.into(), PropSpec::Descriptor(desc));
        self
    }

    pub fn with_computed(mut self, name: impl Into<String>, spec: impl Into<Value>) -> Self {
        self.computed.insert(name.into(), spec.into());
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, spec: impl Into<Value>) -> Self {
        self.methods.insert(name.into(), spec.into());
        self
    }

    /// Enable a design. The designs field exists once any design is added.
    pub fn with_design(mut self, name: impl Into<String>, config: impl Into<Value>) -> Self {
        self.designs
            .get_or_insert_with(Map::new)
            .insert(name.into(), config.into());
        self
    }

    pub fn with_mixin(mut self, mixin: Mixin) -> Self {
        self.mixins.push(mixin);
        self
    }

    pub fn with_emit(mut self, event: impl Into<String>) -> Self {
        self.emits.push(event.into());
        self
    }

    pub fn with_provide(mut self, provide: ProvideFactory) -> Self {
        self.provide = Some(provide);
        self
    }

    pub fn with_inject(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.inject
            .insert(key.clone(), InjectDescriptor::undefined(key));
        self
    }

    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Build options from a dynamic mapping (e.g. a parsed options file).
    ///
    /// A prop entry is descriptor-shaped when it is a mapping whose `type`
    /// names a [`TypeTag`] and whose other keys are `default`/`required`.
    pub fn from_value(value: Value) -> DomainResult<Self> {
        let Value::Object(bag) = value else {
            return Err(DomainError::InvalidOptionsField {
                field: "<root>".into(),
                kind: value.kind().into(),
            });
        };

        let mut options = Self::new();
        for (field, value) in bag {
            match field.as_str() {
                "data" => options.data = Some(value),
                "props" => {
                    for (name, entry) in expect_object("props", value)? {
                        options.props.insert(name, prop_spec(entry));
                    }
                }
                "computed" => options.computed = expect_object("computed", value)?,
                "methods" => options.methods = expect_object("methods", value)?,
                "designs" => options.designs = Some(expect_object("designs", value)?),
                "mixins" => {
                    for (i, mixin) in expect_array("mixins", value)?.into_iter().enumerate() {
                        let map = expect_object(&format!("mixins[{i}]"), mixin)?;
                        options.mixins.push(Mixin::Options(map));
                    }
                }
                "emits" => options.emits = expect_names("emits", value)?,
                "inject" => {
                    for key in expect_names("inject", value)? {
                        options
                            .inject
                            .insert(key.clone(), InjectDescriptor::undefined(key));
                    }
                }
                "provide" => {
                    let provided: Provided = expect_object("provide", value)?;
                    options.provide = Some(ProvideFactory::new(move |_| provided.clone()));
                }
                _ => {
                    options.extra.insert(field, value);
                }
            }
        }
        Ok(options)
    }
}

fn prop_spec(entry: Value) -> PropSpec {
    let Value::Object(map) = &entry else {
        return PropSpec::Example(entry);
    };
    let Some(type_tag) = map
        .get("type")
        .and_then(Value::as_str)
        .and_then(|t| t.parse::<TypeTag>().ok())
    else {
        return PropSpec::Example(entry);
    };
    if map
        .keys()
        .any(|k| !matches!(k.as_str(), "type" | "default" | "required"))
    {
        return PropSpec::Example(entry);
    }

    let default = map.get("default").cloned().unwrap_or_default();
    let default = if type_tag.is_reference() && !default.is_undefined() {
        PropDefault::factory(move || default.clone())
    } else {
        PropDefault::Literal(default)
    };
    PropSpec::Descriptor(PropDescriptor {
        type_tag,
        default,
        required: map.get("required").is_some_and(Value::is_truthy),
    })
}

fn expect_object(field: &str, value: Value) -> DomainResult<Map> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::InvalidOptionsField {
            field: field.into(),
            kind: other.kind().into(),
        }),
    }
}

fn expect_array(field: &str, value: Value) -> DomainResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(DomainError::InvalidOptionsField {
            field: field.into(),
            kind: other.kind().into(),
        }),
    }
}

fn expect_names(field: &str, value: Value) -> DomainResult<Vec<String>> {
    expect_array(field, value)?
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(DomainError::InvalidOptionsField {
                field: format!("{field}[]"),
                kind: other.kind().into(),
            }),
        })
        .collect()
}

// ── Output ────────────────────────────────────────────────────────────────────

/// The assembled definition handed to the host framework.
#[derive(Debug, Clone, Default)]
pub struct ComponentDefinition {
    pub data: Option<DataFactory>,
    pub props: IndexMap<String, PropDescriptor>,
    pub computed: IndexMap<String, DerivedDescriptor>,
    pub methods: IndexMap<String, Callable>,
    pub provide: Option<ProvideFactory>,
    pub inject: IndexMap<String, InjectDescriptor>,
    pub emits: Vec<String>,
    /// Compiled design fragments first, then the caller's own mixins.
    pub mixins: Vec<Mixin>,
    pub extra: Map,
}

impl ComponentDefinition {
    /// Compiled design fragments, in mixin order.
    pub fn fragments(&self) -> impl Iterator<Item = &TraitFragment> {
        self.mixins.iter().filter_map(Mixin::as_design)
    }

    /// Find a derived value the way mixin composition would: the
    /// definition's own entry wins, then later fragments over earlier ones.
    pub fn derived(&self, name: &str) -> Option<&DerivedDescriptor> {
        self.computed.get(name).or_else(|| {
            self.fragments()
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .find_map(|f| f.computed.get(name))
        })
    }

    /// Find a method with the same precedence as [`Self::derived`].
    pub fn method(&self, name: &str) -> Option<&Callable> {
        self.methods.get(name).or_else(|| {
            self.fragments()
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .find_map(|f| f.methods.get(name))
        })
    }

    /// State a fresh instance starts with: fragment prop defaults and data,
    /// then the definition's own, later entries overriding earlier ones.
    pub fn initial_state(&self) -> Map {
        let mut state = Map::new();
        for fragment in self.fragments() {
            seed(&mut state, &fragment.props, fragment.data.as_ref());
        }
        seed(&mut state, &self.props, self.data.as_ref());
        state
    }

    /// Resolve this definition's inject keys (its own and its fragments')
    /// against ancestor provided bags, nearest ancestor first. Keys nobody
    /// provides fall back to their descriptor default.
    pub fn resolve_inject(&self, ancestors: &[&Provided]) -> Map {
        let descriptors = self
            .fragments()
            .flat_map(|f| f.inject.iter())
            .chain(self.inject.iter());

        let mut resolved = Map::new();
        for (key, desc) in descriptors {
            let value = ancestors
                .iter()
                .find_map(|bag| bag.get(&desc.from).cloned())
                .unwrap_or_else(|| desc.default.resolve());
            resolved.insert(key.clone(), value);
        }
        resolved
    }

    /// Every provide factory of the definition and its fragments, combined.
    pub fn provider(&self) -> Option<ProvideFactory> {
        self.fragments()
            .filter_map(|f| f.provide.clone())
            .chain(self.provide.clone())
            .reduce(ProvideFactory::chain)
    }

    /// Instance seeded with [`Self::initial_state`] and `overrides`.
    pub fn instantiate(&self, overrides: Map) -> Instance {
        let mut state = self.initial_state();
        state.extend(overrides);
        Instance::new(state)
    }
}

fn seed(
    state: &mut Map,
    props: &IndexMap<String, PropDescriptor>,
    data: Option<&DataFactory>,
) {
    for (name, desc) in props {
        state.insert(name.clone(), desc.default.resolve());
    }
    if let Some(data) = data {
        state.extend(data.produce());
    }
}
