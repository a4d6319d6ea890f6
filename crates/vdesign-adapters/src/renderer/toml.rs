use serde::Serialize;
use tracing::instrument;
use vdesign_core::{
    application::{ApplicationError, ports::ManifestRenderer},
    domain::Manifest,
    error::VdesignResult,
};

/// Renders manifests as TOML.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlRenderer;

impl TomlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The value must serialize as a table.
    pub fn render_value<T: Serialize + ?Sized>(&self, value: &T) -> VdesignResult<String> {
        ::toml::to_string_pretty(value).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl ManifestRenderer for TomlRenderer {
    #[instrument(skip_all)]
    fn render(&self, manifest: &Manifest) -> VdesignResult<String> {
        self.render_value(manifest)
    }

    fn format_name(&self) -> &'static str {
        "toml"
    }
}
