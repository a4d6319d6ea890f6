//! Options sources.

pub mod directory;
pub mod file;
pub mod format;
pub mod memory;

pub use directory::DirectoryOptionsSource;
pub use file::FileOptionsSource;
pub use format::OptionsFormat;
pub use memory::InMemoryOptionsSource;
