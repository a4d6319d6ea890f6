use serde::Serialize;
use tracing::instrument;
use vdesign_core::{
    application::{ApplicationError, ports::ManifestRenderer},
    domain::Manifest,
    error::VdesignResult,
};

/// Renders manifests as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Render any serializable value with this renderer's settings.
    pub fn render_value<T: Serialize + ?Sized>(&self, value: &T) -> VdesignResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl ManifestRenderer for JsonRenderer {
    #[instrument(skip_all, fields(pretty = self.pretty))]
    fn render(&self, manifest: &Manifest) -> VdesignResult<String> {
        self.render_value(manifest)
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
