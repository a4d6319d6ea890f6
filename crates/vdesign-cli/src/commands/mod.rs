//! Command handlers, one module per subcommand.

pub mod compile;
pub mod completions;
pub mod config;
pub mod designs;
pub mod eval;
pub mod init;
pub mod list;
pub mod presets;

use std::path::Path;

use vdesign_adapters::FileOptionsSource;
use vdesign_core::application::DefinitionService;
use vdesign_core::domain::{Map, Value};

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Service reading `file`, plus the name to load it by. A relative path
/// missing from the working directory is resolved against `options.dir`.
pub(crate) fn file_service(file: &Path, config: &AppConfig) -> (DefinitionService, String) {
    let source = match &config.options.dir {
        Some(dir) if file.is_relative() && !file.exists() => FileOptionsSource::rooted(dir),
        _ => FileOptionsSource::new(),
    };
    (
        DefinitionService::new(Box::new(source)),
        file.to_string_lossy().into_owned(),
    )
}

/// Parse a JSON argument into a dynamic value.
pub(crate) fn parse_json(flag: &str, text: &str) -> CliResult<Value> {
    serde_json::from_str(text).map_err(|e| CliError::InvalidInput {
        message: format!("{flag} is not valid JSON: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Parse a JSON argument that must be an object.
pub(crate) fn parse_json_object(flag: &str, text: &str) -> CliResult<Map> {
    match parse_json(flag, text)? {
        Value::Object(map) => Ok(map),
        other => Err(CliError::InvalidInput {
            message: format!("{flag} must be a JSON object, got {}", other.kind()),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_arguments() {
        let map = parse_json_object("--context", r#"{"color": "primary", "light": true}"#).unwrap();
        assert_eq!(map["color"], Value::from("primary"));
        assert_eq!(map["light"], Value::from(true));

        assert!(matches!(
            parse_json_object("--context", "[1, 2]"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(parse_json("--with", "{not json").is_err());
    }
}
