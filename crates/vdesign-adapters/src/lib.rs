//! Infrastructure adapters for vdesign.
//!
//! Implements the ports defined in `vdesign_core::application::ports`:
//! options sources that read JSON/TOML files, and manifest renderers.

pub mod renderer;
pub mod source;

// Re-export commonly used adapters
pub use renderer::{FORMATS, JsonRenderer, PlainRenderer, TomlRenderer, renderer_for};
pub use source::{DirectoryOptionsSource, FileOptionsSource, InMemoryOptionsSource, OptionsFormat};
