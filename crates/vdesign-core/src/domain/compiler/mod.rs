//! The four primitive compilers every design is built from.
//!
//! ```text
//! props     example value      -> PropDescriptor   (type tag + default)
//! computed  template/branch/.. -> DerivedDescriptor
//! methods   true | function    -> Callable
//! data      mapping | function -> DataFactory
//! ```

pub mod computed;
pub mod data;
pub mod methods;
pub mod props;

pub use computed::{DerivedMode, compile_computed, compile_derived, source_key};
pub use data::normalize_data;
pub use methods::{METHOD_RECIPES, MethodRecipe, compile_methods, toggle};
pub use props::{compile_prop_specs, compile_props, infer_prop};
