//! `vdesign designs` - the built-in design registry.

use vdesign_adapters::PlainRenderer;
use vdesign_core::{
    application::{DesignService, ManifestRenderer},
    domain::Manifest,
};

use crate::{
    cli::DesignsArgs,
    commands::parse_json,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: DesignsArgs, output: OutputManager) -> CliResult<()> {
    let service = DesignService::new();

    let Some(name) = args.name else {
        let designs = service.list();
        if output.is_json() {
            return output.json(&designs);
        }
        output.header("Built-in designs:")?;
        let width = designs.iter().map(|d| d.name.len()).max().unwrap_or(0);
        for design in &designs {
            output.row(
                design.name,
                width,
                &format!("[{}] {}", design.config, design.summary),
            )?;
        }
        return Ok(());
    };

    let config = args
        .design_config
        .as_deref()
        .map(|json| parse_json("--with", json))
        .transpose()?;
    let members = service.inspect(&name, config.as_ref())?;

    if output.is_json() {
        return output.json(&members);
    }
    output.header(&format!("Design {name}:"))?;
    let manifest = Manifest {
        members,
        ..Manifest::default()
    };
    let rendered = PlainRenderer::new().render(&manifest)?;
    output.result(rendered.trim_end())?;
    Ok(())
}
