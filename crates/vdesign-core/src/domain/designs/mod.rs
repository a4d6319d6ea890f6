//! Built-in design generators.
//!
//! Every generator has the shape `fn(Option<&Value>) -> DomainResult<TraitFragment>`
//! and is callable directly or through [`crate::domain::registry`].

pub mod channel;
pub mod color;
pub mod counter;
pub mod effects;
pub mod emits;
pub mod flex;
pub mod options;
pub mod presets;
pub mod scale;
pub mod size;
pub mod vmodel;

pub use color::color;
pub use counter::{inject_counter, provide_counter};
pub use effects::{inject_effects, provide_effects};
pub use emits::emits;
pub use flex::flex;
pub use options::DesignOptions;
pub use presets::{PALETTE, bg_color_presets, text_color_presets};
pub use scale::{rounded, shadow};
pub use size::size;
pub use vmodel::vmodel;

/// Upper-case the first character: `rounded` -> `Rounded`.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
