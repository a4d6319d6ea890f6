//! Application layer for vdesign.
//!
//! - **Services**: `DefinitionService` (load, compile, describe, evaluate)
//!   and `DesignService` (registry listing)
//! - **Ports**: traits for options sources and manifest renderers
//! - **Errors**: loading and rendering failures
//!
//! All compile rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DefinitionService, DesignInfo, DesignService};

pub use ports::{ManifestRenderer, OptionsSource};

pub use error::ApplicationError;
