//! vdesign Core - declarative design-trait compiler.
//!
//! Turns terse, example-driven component configuration into fully shaped
//! definition fragments: typed prop descriptors, derived class strings,
//! instance methods, data factories and provide/inject channels.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           vdesign-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (DefinitionService, DesignService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (OptionsSource, ManifestRenderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     vdesign-adapters (Infrastructure)   │
//! │  (file/directory sources, renderers)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (compilers, designs, registry, Value)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vdesign_core::prelude::*;
//!
//! let options = ComponentOptions::new()
//!     .with_design("rounded", true)
//!     .with_prop("label", "");
//! let def = compile_definition(options).unwrap();
//!
//! let vm = def.instantiate(Map::new());
//! assert_eq!(def.derived("Rounded").unwrap().get(&vm), Value::from("rounded-none"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DefinitionService, DesignService,
        ports::{ManifestRenderer, OptionsSource},
    };
    pub use crate::domain::{
        Callable, ComponentDefinition, ComponentOptions, DerivedDescriptor, Instance, Manifest,
        Map, Mixin, TraitFragment, TypeTag, Value, compile_definition, compile_designs,
    };
    pub use crate::error::{VdesignError, VdesignResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
