//! Compiled descriptors: the shapes the host framework consumes.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::compiler::computed::DerivedMode;
use crate::domain::value::{Callable, Instance, Map, Value};
use crate::domain::value_objects::TypeTag;

// ── Props ─────────────────────────────────────────────────────────────────────

type ValueFactory = dyn Fn() -> Value + Send + Sync;

/// Default of a property: a literal for primitive kinds, a zero-argument
/// factory for reference kinds so instances never share mutable defaults.
#[derive(Clone)]
pub enum PropDefault {
    Literal(Value),
    Factory(Arc<ValueFactory>),
}

impl PropDefault {
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(f))
    }

    /// The value a fresh instance starts with.
    pub fn resolve(&self) -> Value {
        match self {
            Self::Literal(v) => v.clone(),
            Self::Factory(f) => f(),
        }
    }

    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory(_))
    }
}

impl fmt::Debug for PropDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// `{ type, default }` pair for one declared property.
#[derive(Debug, Clone)]
pub struct PropDescriptor {
    pub type_tag: TypeTag,
    pub default: PropDefault,
    pub required: bool,
}

impl PropDescriptor {
    pub fn new(type_tag: TypeTag, default: PropDefault) -> Self {
        Self {
            type_tag,
            default,
            required: false,
        }
    }
}

// ── Derived values ────────────────────────────────────────────────────────────

/// A compiled derived value.
#[derive(Debug, Clone)]
pub enum DerivedDescriptor {
    /// Author-supplied getter, used verbatim.
    Getter(Callable),
    /// Author-supplied `{get, set}` pair.
    Accessor { get: Callable, set: Option<Callable> },
    /// Formatter over one source property; mode decided at compile time.
    Formatted { source: String, mode: DerivedMode },
}

impl DerivedDescriptor {
    /// Evaluate against `ctx`.
    pub fn get(&self, ctx: &Instance) -> Value {
        match self {
            Self::Getter(get) | Self::Accessor { get, .. } => get.call(ctx, &[]),
            Self::Formatted { source, mode } => mode.resolve(&ctx.get(source)),
        }
    }

    /// Write through the setter. Descriptors without one ignore the write.
    pub fn set(&self, ctx: &Instance, value: Value) {
        match self {
            Self::Accessor { set: Some(set), .. } => {
                set.call(ctx, &[value]);
            }
            _ => tracing::warn!("write to a derived value without a setter was ignored"),
        }
    }

    /// Short mode name for manifests.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Getter(_) => "getter",
            Self::Accessor { .. } => "accessor",
            Self::Formatted { mode, .. } => mode.name(),
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Formatted { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ── Data, provide, inject ─────────────────────────────────────────────────────

type MapFactory = dyn Fn() -> Map + Send + Sync;

/// Zero-argument factory producing an instance's initial data.
#[derive(Clone)]
pub struct DataFactory(Arc<MapFactory>);

impl DataFactory {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Map + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn produce(&self) -> Map {
        (self.0)()
    }
}

impl fmt::Debug for DataFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DataFactory(..)")
    }
}

/// Channel entries handed to descendants, keyed `<prefix><Operation>`.
/// Function entries are bound to the providing instance.
pub type Provided = IndexMap<String, Value>;

type ProvideFn = dyn Fn(&Instance) -> Provided + Send + Sync;

/// Builds the provided bag for a live providing instance.
#[derive(Clone)]
pub struct ProvideFactory(Arc<ProvideFn>);

impl ProvideFactory {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Instance) -> Provided + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn provide(&self, ctx: &Instance) -> Provided {
        (self.0)(ctx)
    }

    /// Combine two factories; later entries win on key collision.
    pub fn chain(first: ProvideFactory, second: ProvideFactory) -> ProvideFactory {
        ProvideFactory::new(move |ctx| {
            let mut provided = first.provide(ctx);
            provided.extend(second.provide(ctx));
            provided
        })
    }
}

impl fmt::Debug for ProvideFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProvideFactory(..)")
    }
}

/// Inject-side placeholder used when no ancestor provides the key.
#[derive(Debug, Clone)]
pub struct InjectDescriptor {
    pub from: String,
    pub default: PropDefault,
}

impl InjectDescriptor {
    /// Inject `key` with an `undefined` fallback.
    pub fn undefined(key: impl Into<String>) -> Self {
        Self {
            from: key.into(),
            default: PropDefault::factory(|| Value::Undefined),
        }
    }
}
