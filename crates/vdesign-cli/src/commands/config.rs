//! `vdesign config` - inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
            output.result(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(&config);
            }
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.header("Current Configuration:")?;
            output.result(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.result(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}
