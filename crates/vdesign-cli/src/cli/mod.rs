//! CLI argument definitions using the clap derive API.
//!
//! Argument names, help text and value enums live here. No business logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "vdesign",
    bin_name = "vdesign",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Declarative design-trait compiler",
    long_about = "vdesign compiles terse component options (props by example, \
                  derived-value specs, design traits) into full component \
                  definitions and describes the result.",
    after_help = "EXAMPLES:\n\
        \x20 vdesign compile button.toml\n\
        \x20 vdesign eval button.toml Color --context '{\"color\": \"primary\"}'\n\
        \x20 vdesign designs\n\
        \x20 vdesign completions bash > /usr/share/bash-completion/completions/vdesign",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile an options file and print its manifest.
    #[command(
        visible_alias = "c",
        about = "Compile an options file and print its manifest",
        after_help = "EXAMPLES:\n\
            \x20 vdesign compile button.json\n\
            \x20 vdesign compile forms/input.toml --format toml"
    )]
    Compile(CompileArgs),

    /// Evaluate one derived value of a compiled options file.
    #[command(
        about = "Evaluate a derived value",
        after_help = "EXAMPLES:\n\
            \x20 vdesign eval button.json Color\n\
            \x20 vdesign eval button.json Color --context '{\"outline\": true}'"
    )]
    Eval(EvalArgs),

    /// List the options files of a directory.
    #[command(
        visible_alias = "ls",
        about = "List options files",
        after_help = "EXAMPLES:\n\
            \x20 vdesign list\n\
            \x20 vdesign list components/"
    )]
    List(ListArgs),

    /// Show the built-in designs.
    #[command(
        about = "List built-in designs",
        after_help = "EXAMPLES:\n\
            \x20 vdesign designs\n\
            \x20 vdesign designs color\n\
            \x20 vdesign designs provideCounter --with '\"tabs\"'"
    )]
    Designs(DesignsArgs),

    /// Print the color preset catalogs.
    #[command(about = "Print color preset catalogs")]
    Presets(PresetsArgs),

    /// Initialise a vdesign configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 vdesign init           # platform config directory\n\
            \x20 vdesign init --local   # ./.vdesign.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vdesign completions bash > ~/.local/share/bash-completion/completions/vdesign\n\
            \x20 vdesign completions zsh  > ~/.zfunc/_vdesign\n\
            \x20 vdesign completions fish > ~/.config/fish/completions/vdesign.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the vdesign configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vdesign config get output.format\n\
            \x20 vdesign config list\n\
            \x20 vdesign config path"
    )]
    Config(ConfigCommands),
}

// ── compile ───────────────────────────────────────────────────────────────────

/// Arguments for `vdesign compile`.
#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Options file (`.json` or `.toml`). Relative paths that do not exist
    /// are looked up in the configured options directory.
    #[arg(value_name = "FILE", help = "Options file to compile")]
    pub file: PathBuf,

    /// Manifest format. Defaults to `options.manifest_format` from config.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "Manifest format"
    )]
    pub format: Option<ManifestFormat>,
}

/// Output format of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManifestFormat {
    Json,
    Toml,
    Plain,
}

impl ManifestFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Plain => "plain",
        }
    }
}

// ── eval ──────────────────────────────────────────────────────────────────────

/// Arguments for `vdesign eval`.
#[derive(Debug, Args)]
pub struct EvalArgs {
    #[arg(value_name = "FILE", help = "Options file to compile")]
    pub file: PathBuf,

    /// Name of the derived value, e.g. `Color`.
    #[arg(value_name = "COMPUTED", help = "Derived value to evaluate")]
    pub computed: String,

    /// JSON object merged over the instance's initial state.
    #[arg(
        long = "context",
        value_name = "JSON",
        help = "Instance state overrides as a JSON object"
    )]
    pub context: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `vdesign list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory to scan. Defaults to `options.dir` from config, then `.`.
    #[arg(value_name = "DIR", help = "Directory of options files")]
    pub dir: Option<PathBuf>,
}

// ── designs ───────────────────────────────────────────────────────────────────

/// Arguments for `vdesign designs`.
#[derive(Debug, Args)]
pub struct DesignsArgs {
    /// Show the members one design generates.
    #[arg(value_name = "NAME", help = "Design to inspect")]
    pub name: Option<String>,

    /// Design configuration as JSON (requires NAME).
    #[arg(
        long = "with",
        value_name = "JSON",
        requires = "name",
        help = "Design configuration as JSON"
    )]
    pub design_config: Option<String>,
}

// ── presets ───────────────────────────────────────────────────────────────────

/// Arguments for `vdesign presets`.
#[derive(Debug, Args)]
pub struct PresetsArgs {
    /// Catalog to print; both when omitted.
    #[arg(value_enum, help = "Preset catalog")]
    pub catalog: Option<PresetCatalog>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetCatalog {
    ColorBg,
    ColorText,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `vdesign init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.vdesign.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `vdesign completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `vdesign config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
