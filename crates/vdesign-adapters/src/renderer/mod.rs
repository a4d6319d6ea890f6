//! Manifest renderers.

mod json;
mod plain;
mod toml;

pub use json::JsonRenderer;
pub use plain::PlainRenderer;
pub use toml::TomlRenderer;

use vdesign_core::application::ports::ManifestRenderer;

/// Format names accepted by [`renderer_for`].
pub const FORMATS: &[&str] = &["json", "toml", "plain"];

/// Renderer for a format name, case-insensitive.
pub fn renderer_for(format: &str) -> Option<Box<dyn ManifestRenderer>> {
    match format.to_ascii_lowercase().as_str() {
        "json" => Some(Box::new(JsonRenderer::pretty())),
        "toml" => Some(Box::new(TomlRenderer::new())),
        "plain" | "text" => Some(Box::new(PlainRenderer::new())),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_format_has_a_renderer() {
        for format in FORMATS {
            let renderer = renderer_for(format).unwrap();
            assert_eq!(renderer.format_name(), *format);
        }
        assert!(renderer_for("JSON").is_some());
        assert!(renderer_for("yaml").is_none());
    }
}
