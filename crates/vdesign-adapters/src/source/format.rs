//! Options file formats.

use std::fmt;
use std::path::Path;

use vdesign_core::{application::ApplicationError, domain::Value, error::VdesignResult};

/// Supported options file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Json,
    Toml,
}

impl OptionsFormat {
    pub const EXTENSIONS: &'static [&'static str] = &["json", "toml"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Format of `path`, or `UnsupportedFormat`.
    pub fn from_path(path: &Path) -> VdesignResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| {
            ApplicationError::UnsupportedFormat {
                extension: ext.to_owned(),
            }
            .into()
        })
    }

    /// Parse `text` into a dynamic value. `origin` names the input in errors.
    pub fn parse(self, text: &str, origin: &str) -> VdesignResult<Value> {
        let parsed = match self {
            Self::Json => serde_json::from_str::<Value>(text).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str::<Value>(text).map_err(|e| e.to_string()),
        };
        parsed.map_err(|reason| {
            ApplicationError::ParseFailed {
                origin: origin.to_owned(),
                reason,
            }
            .into()
        })
    }
}

impl fmt::Display for OptionsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Toml => "toml",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(
            OptionsFormat::from_path(Path::new("a/button.JSON")).unwrap(),
            OptionsFormat::Json
        );
        assert_eq!(
            OptionsFormat::from_path(Path::new("button.toml")).unwrap(),
            OptionsFormat::Toml
        );
        assert!(OptionsFormat::from_path(Path::new("button.yaml")).is_err());
    }

    #[test]
    fn json_keeps_document_order() {
        let value = OptionsFormat::Json
            .parse(r#"{"designs": {"shadow": true, "color": {"light": true}}}"#, "inline")
            .unwrap();
        let designs = value.as_object().unwrap()["designs"].as_object().unwrap();
        assert_eq!(designs.keys().collect::<Vec<_>>(), ["shadow", "color"]);
        assert_eq!(designs["color"], Value::object([("light", true)]));
    }

    #[test]
    fn toml_tables_become_mappings() {
        let text = r#"
            mixins = [{ foo = 100 }]

            [designs]
            rounded = true
            emits = ["click"]
        "#;
        let value = OptionsFormat::Toml.parse(text, "inline").unwrap();
        let bag = value.as_object().unwrap();
        assert_eq!(bag["designs"].as_object().unwrap()["emits"], Value::array(["click"]));
        assert_eq!(bag["mixins"], Value::array([Value::object([("foo", 100)])]));
    }

    #[test]
    fn parse_errors_name_origin() {
        let err = OptionsFormat::Json.parse("{", "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
