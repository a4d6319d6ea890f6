//! Directory-backed options source.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use vdesign_core::{
    application::{ApplicationError, ports::OptionsSource},
    domain::Value,
    error::VdesignResult,
};
use walkdir::WalkDir;

use crate::source::file::read_options;
use crate::source::format::OptionsFormat;

/// Every `*.json`/`*.toml` file under `root`, named by its path relative to
/// `root` without extension (`forms/input.toml` is `forms/input`).
#[derive(Debug, Clone)]
pub struct DirectoryOptionsSource {
    root: PathBuf,
}

impl DirectoryOptionsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn name_of(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?.with_extension("");
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }

    /// Options files under the root, sorted by path. Entries that cannot be
    /// read are skipped with a warning.
    fn files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %self.root.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            let known = path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(OptionsFormat::from_extension)
                .is_some();
            if entry.file_type().is_file() && known {
                files.push(path.to_path_buf());
            }
        }
        files
    }
}

impl OptionsSource for DirectoryOptionsSource {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, name: &str) -> VdesignResult<Value> {
        let found = OptionsFormat::EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{name}.{ext}")))
            .find(|path| path.is_file());
        match found {
            Some(path) => read_options(&path),
            None => Err(ApplicationError::SourceNotFound {
                name: name.to_owned(),
            }
            .into()),
        }
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn list(&self) -> VdesignResult<Vec<String>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::SourceNotFound {
                name: self.root.display().to_string(),
            }
            .into());
        }
        let names: Vec<String> = self
            .files()
            .iter()
            .filter_map(|path| self.name_of(path))
            .collect();
        debug!(count = names.len(), "listed options files");
        Ok(names)
    }
}
