//! `vdesign presets` - color preset catalogs.

use vdesign_core::domain::{
    Map,
    designs::{bg_color_presets, text_color_presets},
};

use crate::{
    cli::{PresetCatalog, PresetsArgs},
    error::CliResult,
    output::OutputManager,
};

fn catalogs(selected: Option<PresetCatalog>) -> Vec<(&'static str, Map)> {
    let all = [
        (PresetCatalog::ColorBg, "color-bg", bg_color_presets as fn() -> Map),
        (PresetCatalog::ColorText, "color-text", text_color_presets),
    ];
    all.into_iter()
        .filter(|(catalog, ..)| selected.is_none_or(|s| s == *catalog))
        .map(|(_, name, build)| (name, build()))
        .collect()
}

pub fn execute(args: PresetsArgs, output: OutputManager) -> CliResult<()> {
    let catalogs = catalogs(args.catalog);

    if output.is_json() {
        let by_name: Map = catalogs
            .into_iter()
            .map(|(name, presets)| (name.to_owned(), presets.into()))
            .collect();
        return output.json(&by_name);
    }

    for (name, presets) in &catalogs {
        output.header(&format!("{name}:"))?;
        let width = presets.keys().map(String::len).max().unwrap_or(0);
        for (color, class) in presets {
            output.row(color, width, &class.to_string())?;
        }
    }
    Ok(())
}
