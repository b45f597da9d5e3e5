//! CLI argument definitions
//!
//! All Clap derive structs for `tsconfig-validator` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;
use crate::schema::GroupId;

// ============================================================================
// Root CLI
// ============================================================================

/// Schema-driven validator for TypeScript project configuration files.
#[derive(Parser, Debug)]
#[command(name = "tsconfig-validator", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(
        long,
        default_value = "auto",
        global = true,
        env = "TSCONFIG_VALIDATOR_COLOR"
    )]
    pub color: ColorChoice,

    /// Log output format on stderr.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "TSCONFIG_VALIDATOR_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration files against the schema.
    Validate(ValidateArgs),

    /// Print the schema table.
    Schema(SchemaArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration files to validate (`-` reads standard input).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Treat warnings (unknown keys) as failures.
    #[arg(long, env = "TSCONFIG_VALIDATOR_STRICT")]
    pub strict: bool,

    /// Print each validated configuration, defaults included.
    #[arg(long)]
    pub print_config: bool,

    /// Maximum document size in bytes.
    #[arg(long, env = "TSCONFIG_VALIDATOR_MAX_CONFIG_SIZE")]
    pub max_size: Option<u64>,

    /// Write Prometheus metrics for this run to a textfile.
    #[arg(long, env = "TSCONFIG_VALIDATOR_METRICS_FILE")]
    pub metrics_file: Option<PathBuf>,
}

/// Arguments for `schema`.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Only print one group.
    #[arg(short, long)]
    pub group: Option<GroupId>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
