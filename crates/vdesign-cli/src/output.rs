//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Writes command output according to flags and config.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// `--output-format` wins over the configured format; `auto` resolves to
    /// `human` on a terminal and `plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_name(&config.output.format),
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto | OutputFormat::Human if !io::stdout().is_terminal() => {
                OutputFormat::Plain
            }
            OutputFormat::Auto => OutputFormat::Human,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Command result; written even in quiet mode.
    pub fn result(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Serialize `value` as pretty JSON on stdout.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("Failed to serialise output: {e}"),
            source: Some(Box::new(e)),
        })?;
        Ok(self.result(&text)?)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `  name  detail` row with the name padded to `width`.
    pub fn row(&self, name: &str, width: usize, detail: &str) -> io::Result<()> {
        let name = format!("{name:<width$}");
        let line = if !self.supports_color() {
            format!("  {name}  {detail}")
        } else {
            format!("  {}  {}", name.bold(), detail.dimmed())
        };
        self.result(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(format: OutputFormat, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn explicit_format_is_kept() {
        assert!(!make_manager(OutputFormat::Plain, false).is_json());
        assert!(make_manager(OutputFormat::Json, false).is_json());
    }

    #[test]
    fn configured_format_applies_to_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert!(OutputManager::new(&args, &config).is_json());
    }

    #[test]
    fn non_human_formats_disable_color() {
        assert!(!make_manager(OutputFormat::Plain, false).supports_color());
        assert!(!make_manager(OutputFormat::Json, false).supports_color());
    }

    #[test]
    fn quiet_print_is_ok() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(out.success("hidden").is_ok());
    }
}
