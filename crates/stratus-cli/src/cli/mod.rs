//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Running `stratus` with no subcommand renders the default stack to stdout.
#[derive(Debug, Parser)]
#[command(
    name    = "stratus",
    bin_name = "stratus",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2601} Declarative CloudFormation templates",
    long_about = "Stratus builds CloudFormation templates from typed stack \
                  definitions and prints them as JSON.",
    after_help = "EXAMPLES:\n\
        \x20 stratus                              # render the default stack to stdout\n\
        \x20 stratus render ecs-cluster -o ecs.json\n\
        \x20 stratus list --format json\n\
        \x20 stratus completions bash > /usr/share/bash-completion/completions/stratus",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a stack to stdout or a file.
    #[command(
        visible_alias = "r",
        about = "Render a stack template",
        after_help = "EXAMPLES:\n\
            \x20 stratus render\n\
            \x20 stratus render ecs-cluster --compact\n\
            \x20 stratus render ecs-cluster -o out/ecs.json --force"
    )]
    Render(RenderArgs),

    /// Build and render a stack without writing it.
    #[command(
        about = "Check a stack for integrity problems",
        after_help = "EXAMPLES:\n\
            \x20 stratus check\n\
            \x20 stratus check ecs-cluster"
    )]
    Check(CheckArgs),

    /// List available stacks.
    #[command(
        visible_alias = "ls",
        about = "List available stacks",
        after_help = "EXAMPLES:\n\
            \x20 stratus list\n\
            \x20 stratus list --format json"
    )]
    List(ListArgs),

    /// Initialise a Stratus configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stratus init           # platform config directory\n\
            \x20 stratus init --local   # .stratus.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stratus completions bash > ~/.local/share/bash-completion/completions/stratus\n\
            \x20 stratus completions zsh  > ~/.zfunc/_stratus\n\
            \x20 stratus completions fish > ~/.config/fish/completions/stratus.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stratus configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stratus config get defaults.stack\n\
            \x20 stratus config list\n\
            \x20 stratus config path"
    )]
    Config(ConfigCommands),
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `stratus render`.
#[derive(Debug, Default, Args)]
pub struct RenderArgs {
    /// Stack to render (default: `defaults.stack` from config).
    #[arg(value_name = "STACK", help = "Stack name")]
    pub stack: Option<String>,

    /// Write the document to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON.
    #[arg(long = "compact", help = "Emit compact single-line JSON")]
    pub compact: bool,

    /// Overwrite an existing output file.
    #[arg(long = "force", help = "Overwrite existing output file")]
    pub force: bool,

    /// Skip the overwrite confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    pub yes: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `stratus check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Stack to check (default: `defaults.stack` from config).
    #[arg(value_name = "STACK", help = "Stack name")]
    pub stack: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stratus list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stratus init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stratus.toml` in the current directory.
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

/// Arguments for `stratus completions`.
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

/// Subcommands for `stratus config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.stack`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
