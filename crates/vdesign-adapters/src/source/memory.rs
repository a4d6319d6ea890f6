//! In-memory options source.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use vdesign_core::{
    application::{ApplicationError, ports::OptionsSource},
    domain::Value,
    error::VdesignResult,
};

/// Thread-safe in-memory options store.
#[derive(Clone, Default)]
pub struct InMemoryOptionsSource {
    inner: Arc<RwLock<IndexMap<String, Value>>>,
}

impl InMemoryOptionsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a bag.
    pub fn insert(&self, name: impl Into<String>, options: Value) -> VdesignResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), options);
        Ok(())
    }

    pub fn with(self, name: impl Into<String>, options: Value) -> VdesignResult<Self> {
        self.insert(name, options)?;
        Ok(self)
    }
}

impl OptionsSource for InMemoryOptionsSource {
    fn load(&self, name: &str) -> VdesignResult<Value> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::SourceNotFound {
                name: name.to_owned(),
            }
            .into()
        })
    }

    fn list(&self) -> VdesignResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_load_and_list() {
        let source = InMemoryOptionsSource::new()
            .with("b", Value::object([("designs", Value::object([("flex", true)]))]))
            .unwrap()
            .with("a", Value::object([("props", Value::object([("x", 1)]))]))
            .unwrap();

        assert_eq!(source.list().unwrap(), ["b", "a"]);
        assert!(source.load("a").is_ok());
        assert!(source.load("c").is_err());
    }
}
