//! `vdesign list` - options files of a directory and the designs they use.

use std::path::PathBuf;

use tracing::warn;
use vdesign_adapters::DirectoryOptionsSource;
use vdesign_core::application::DefinitionService;

use crate::{cli::ListArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = args
        .dir
        .or(config.options.dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let service = DefinitionService::new(Box::new(DirectoryOptionsSource::new(&dir)));
    let names = service.available()?;

    if output.is_json() {
        return output.json(&names);
    }
    if names.is_empty() {
        output.info(&format!("No options files in {}", dir.display()))?;
        return Ok(());
    }

    output.header(&format!("Options files in {}:", dir.display()))?;
    let width = names.iter().map(String::len).max().unwrap_or(0);
    for name in &names {
        let detail = match service.describe(name) {
            Ok(manifest) => match manifest.design_names().as_slice() {
                [] => "no designs".to_owned(),
                designs => designs.join(", "),
            },
            Err(e) => {
                warn!(name = %name, error = %e, "options file does not compile");
                format!("error: {e}")
            }
        };
        output.row(name, width, &detail)?;
    }
    Ok(())
}
