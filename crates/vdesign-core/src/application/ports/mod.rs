//! Driven ports, implemented in `vdesign-adapters`.
//!
//! - `OptionsSource`: where raw options bags come from
//! - `ManifestRenderer`: how a manifest becomes text

use crate::domain::{Manifest, Value};
use crate::error::VdesignResult;

/// Port for loading raw options bags.
///
/// Implemented by:
/// - `vdesign_adapters::source::FileOptionsSource` (one JSON/TOML file)
/// - `vdesign_adapters::source::DirectoryOptionsSource` (a directory of them)
/// - `vdesign_adapters::source::InMemoryOptionsSource` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait OptionsSource: Send + Sync {
    /// Load the named bag as a dynamic value.
    fn load(&self, name: &str) -> VdesignResult<Value>;

    /// Names `load` accepts.
    fn list(&self) -> VdesignResult<Vec<String>>;
}

/// Port for rendering manifests.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestRenderer: Send + Sync {
    fn render(&self, manifest: &Manifest) -> VdesignResult<String>;

    /// Short format name (`json`, `toml`, `plain`).
    fn format_name(&self) -> &'static str;
}
