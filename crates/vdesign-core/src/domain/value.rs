//! Dynamic value model the compilers operate on.
//!
//! Component configuration is example-driven: a prop is declared by giving a
//! sample value, a derived value by giving a template string, a branch list
//! or a lookup table. [`Value`] is the closed universe of those inputs, and
//! [`Instance`] is the evaluation context a compiled closure receives when
//! the host framework runs it.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered string-keyed mapping. Declaration order is semantic for props,
/// derived values and designs, so every mapping in the crate keeps it.
pub type Map = IndexMap<String, Value>;

// ── Callable ──────────────────────────────────────────────────────────────────

type CallableFn = dyn Fn(&Instance, &[Value]) -> Value + Send + Sync;

/// A shared closure invoked with an explicit evaluation context.
///
/// Clones share the underlying closure, so identity survives cloning
/// ([`Callable::ptr_eq`]).
#[derive(Clone)]
pub struct Callable(Arc<CallableFn>);

impl Callable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invoke against `ctx`.
    pub fn call(&self, ctx: &Instance, args: &[Value]) -> Value {
        (self.0)(ctx, args)
    }

    /// Bind this callable to `ctx`: the result ignores whatever context it
    /// is later called with and always runs against `ctx`.
    pub fn bind(&self, ctx: &Instance) -> Callable {
        let inner = self.clone();
        let bound = ctx.clone();
        Callable::new(move |_, args| inner.call(&bound, args))
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({:p})", Arc::as_ptr(&self.0))
    }
}

// ── Value ─────────────────────────────────────────────────────────────────────

/// A configuration or instance-state value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Function(Callable),
}

impl Value {
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn array<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Value + Send + Sync + 'static,
    {
        Value::Function(Callable::new(f))
    }

    /// Kind name used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Bool(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Array(_) => "Array",
            Self::Object(_) => "Object",
            Self::Function(_) => "Function",
        }
    }

    /// Truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""` are
    /// falsy; everything else, including empty arrays and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Strict equality. Primitives compare by kind and value, functions by
    /// identity. Arrays and objects carry no identity and never compare equal.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Callable> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }
}

/// String form used by template substitution and lookup keys.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => f.write_str(s),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // holes and nullish entries print empty
                    if !matches!(item, Self::Undefined | Self::Null) {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => f.write_str("[object Object]"),
            Self::Function(_) => f.write_str("function"),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.into()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".into()
    } else if (1e-6..1e21).contains(&n.abs()) {
        // shortest round-trip digits, never an exponent
        format!("{n}")
    } else {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    }
}

/// Structural equality, used by tests and manifest comparisons. Functions
/// compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => self.strict_eq(other),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Object(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Value::Function(f)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

/// Functions serialize as the marker string `"[function]"`; `undefined`
/// and `null` both serialize as none. Integral numbers serialize as
/// integers.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Self::Function(_) => serializer.serialize_str("[function]"),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a configuration value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Value, D::Error> {
        Value::deserialize(d)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((k, v)) = access.next_entry::<String, Value>()? {
            map.insert(k, v);
        }
        Ok(Value::Object(map))
    }
}

/// Parsed documents never contain `undefined` or functions.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

// ── Instance ──────────────────────────────────────────────────────────────────

/// Key under which an instance stores its emit primitive.
pub const EMIT_KEY: &str = "$emit";

/// Evaluation context handed to compiled getters, setters and methods.
///
/// A cheap handle over shared state: clones observe each other's writes,
/// which is what lets a provided channel mutate its providing instance.
/// Reads clone values out and writes replace entries; no lock is held while
/// a callable runs, so callbacks may freely re-enter the instance.
#[derive(Clone, Default)]
pub struct Instance {
    state: Arc<RwLock<Map>>,
}

impl Instance {
    pub fn new(state: Map) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// One level of property access; missing keys read as `undefined`.
    pub fn get(&self, key: &str) -> Value {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// Read-modify-write a single entry under one write lock.
    pub fn update<R>(&self, key: &str, f: impl FnOnce(&mut Value) -> R) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let slot = state.entry(key.to_owned()).or_default();
        f(slot)
    }

    /// Copy of the whole state.
    pub fn snapshot(&self) -> Map {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Invoke the instance's emit primitive with `[event, ...args]`.
    /// Returns `undefined` when no emitter is installed.
    pub fn emit(&self, event: &str, args: &[Value]) -> Value {
        let Value::Function(emitter) = self.get(EMIT_KEY) else {
            tracing::debug!(event, "emit without an installed emitter");
            return Value::Undefined;
        };
        let mut call_args = Vec::with_capacity(args.len() + 1);
        call_args.push(Value::from(event));
        call_args.extend_from_slice(args);
        emitter.call(self, &call_args)
    }

    /// Install an emit primitive.
    pub fn with_emitter<F>(self, f: F) -> Self
    where
        F: Fn(&Instance, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.set(EMIT_KEY, Value::function(f));
        self
    }

    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl From<Map> for Instance {
    fn from(state: Map) -> Self {
        Instance::new(state)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("state", &self.snapshot())
            .finish()
    }
}

/// Build an [`Instance`] from `key => value` pairs.
#[macro_export]
macro_rules! instance {
    () => { $crate::domain::Instance::default() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut state = $crate::domain::Map::new();
        $( state.insert(::std::string::String::from($key), $crate::domain::Value::from($value)); )+
        $crate::domain::Instance::new(state)
    }};
}
