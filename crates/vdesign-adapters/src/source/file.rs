//! Path-addressed options source.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use vdesign_core::{
    application::{ApplicationError, ports::OptionsSource},
    domain::Value,
    error::VdesignResult,
};

use crate::source::format::OptionsFormat;

/// Loads options files by path. Names are paths, resolved against `root`
/// when relative.
#[derive(Debug, Clone, Default)]
pub struct FileOptionsSource {
    root: Option<PathBuf>,
}

impl FileOptionsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative names against `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Read and parse one options file.
pub(crate) fn read_options(path: &Path) -> VdesignResult<Value> {
    let format = OptionsFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| ApplicationError::SourceUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), %format, bytes = text.len(), "read options file");
    format.parse(&text, &path.display().to_string())
}

impl OptionsSource for FileOptionsSource {
    #[instrument(skip(self))]
    fn load(&self, name: &str) -> VdesignResult<Value> {
        let path = self.resolve(name);
        if !path.is_file() {
            return Err(ApplicationError::SourceNotFound {
                name: name.to_owned(),
            }
            .into());
        }
        read_options(&path)
    }

    /// Paths are not enumerable; use a directory source for listing.
    fn list(&self) -> VdesignResult<Vec<String>> {
        Ok(Vec::new())
    }
}
