//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `VDESIGN__SECTION__KEY` environment variables (`.env` included)
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults

use std::path::PathBuf;

use anyhow::Context;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Name of the per-directory config file written by `vdesign init --local`.
pub const LOCAL_CONFIG: &str = ".vdesign.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Options-file settings.
    pub options: OptionsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `human`, `plain`, `json` or `auto`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Where `list` looks and where relative files are resolved as a
    /// fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Default for `compile --format`.
    pub manifest_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
            options: OptionsConfig {
                dir: None,
                manifest_format: "json".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration over the built-in defaults.
    ///
    /// An explicit `config_file` must exist and is the only file read.
    /// Otherwise the platform config file and then `./.vdesign.toml` are
    /// layered in when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let files = match config_file {
            Some(path) => vec![(path.clone(), true)],
            None => vec![
                (Self::config_path(), false),
                (PathBuf::from(LOCAL_CONFIG), false),
            ],
        };
        Self::load_from(&files)
    }

    fn load_from(files: &[(PathBuf, bool)]) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);
        for (path, required) in files {
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("VDESIGN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs`, falling back to `.vdesign.toml` in
    /// the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "vdesign", "vdesign")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// Value of a dotted key, as printed by `config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            "options.dir" => Some(
                self.options
                    .dir
                    .as_ref()
                    .map(|d| d.display().to_string())
                    .unwrap_or_default(),
            ),
            "options.manifest_format" => Some(self.options.manifest_format.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.output.format, "human");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.options.manifest_format, "json");
        assert!(cfg.options.dir.is_none());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&[(dir.path().join("absent.toml"), false)]).unwrap();
        assert_eq!(cfg.options.manifest_format, "json");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_overrides_defaults_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[options]\nmanifest_format = \"toml\"\ndir = \"components\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.options.manifest_format, "toml");
        assert_eq!(cfg.options.dir, Some(PathBuf::from("components")));
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn later_files_win() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "[output]\nformat = \"plain\"\nno_color = true\n").unwrap();
        fs::write(&local, "[output]\nformat = \"json\"\n").unwrap();

        let cfg = AppConfig::load_from(&[(global, true), (local, true)]).unwrap();
        assert_eq!(cfg.output.format, "json");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("options.dir").as_deref(), Some(""));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
