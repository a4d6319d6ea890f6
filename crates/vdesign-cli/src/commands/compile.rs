//! `vdesign compile` - print the manifest of an options file.

use tracing::instrument;
use vdesign_adapters::{FORMATS, renderer_for};

use crate::{
    cli::CompileArgs,
    commands::file_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: CompileArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let format = match args.format {
        Some(format) => format.as_str().to_owned(),
        None => config.options.manifest_format.clone(),
    };
    let renderer = renderer_for(&format).ok_or_else(|| CliError::ConfigError {
        message: format!(
            "unknown manifest format '{format}' (expected one of: {})",
            FORMATS.join(", ")
        ),
        source: None,
    })?;

    let (service, name) = file_service(&args.file, &config);
    let rendered = service.render(&name, renderer.as_ref())?;
    output.result(rendered.trim_end())?;
    Ok(())
}
