//! Built-in color preset catalogs.

use crate::domain::value::{Map, Value};

/// Palette every catalog covers, in display order.
pub const PALETTE: &[&str] = &[
    "primary",
    "secondary",
    "accent",
    "neutral",
    "base",
    "info",
    "success",
    "warning",
    "error",
];

fn catalog(prefix: &str) -> Map {
    PALETTE
        .iter()
        .map(|c| ((*c).to_owned(), Value::String(format!("{prefix}-{c}"))))
        .collect()
}

/// `{primary: "bg-primary", ...}`.
pub fn bg_color_presets() -> Map {
    catalog("bg")
}

/// `{primary: "text-primary", ...}`.
pub fn text_color_presets() -> Map {
    catalog("text")
}
