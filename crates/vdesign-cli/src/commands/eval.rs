//! `vdesign eval` - evaluate one derived value.

use tracing::instrument;
use vdesign_core::domain::Map;

use crate::{
    cli::EvalArgs,
    commands::{file_service, parse_json_object},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display(), computed = %args.computed))]
pub fn execute(args: EvalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let context = match &args.context {
        Some(json) => parse_json_object("--context", json)?,
        None => Map::new(),
    };

    let (service, name) = file_service(&args.file, &config);
    let value = service.evaluate(&name, &args.computed, context)?;

    if output.is_json() {
        output.json(&value)
    } else {
        Ok(output.result(&value.to_string())?)
    }
}
