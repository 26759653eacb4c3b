//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use relvocab_domain::BooleanDisplayStatus;

/// Relvocab CLI - Query the threat-intelligence relationship vocabulary.
#[derive(Debug, Parser)]
#[command(name = "relvocab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RELVOCAB_CONFIG")]
    pub config: Option<String>,

    /// Locale to translate labels with
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Relationship types allowed between two entity types
    #[command(alias = "rel")]
    Relations(RelationsArgs),

    /// Entity types a type can relate to
    Targets(TargetsArgs),

    /// Check whether a verb is a kill-chain phase
    #[command(alias = "kc")]
    KillChain(KillChainArgs),

    /// Render a tri-state status chip
    Status(StatusArgs),

    /// Dump a relation table
    Table(TableArgs),

    /// Manage translation locales
    Locale(LocaleArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the relations command.
#[derive(Debug, Parser)]
pub struct RelationsArgs {
    /// Source entity type (e.g. Malware)
    pub from: String,

    /// Target entity type (e.g. Threat-Actor)
    pub to: String,

    /// Do not append the generic related-to verb
    #[arg(long)]
    pub no_related_to: bool,

    /// Use the cyber observable table
    #[arg(short, long)]
    pub observable: bool,
}

/// Arguments for the targets command.
#[derive(Debug, Parser)]
pub struct TargetsArgs {
    /// Source entity type
    pub from: String,

    /// Use the cyber observable table
    #[arg(short, long)]
    pub observable: bool,

    /// Match the source type exactly instead of as a substring
    #[arg(short, long)]
    pub exact: bool,
}

/// Arguments for the kill-chain command.
#[derive(Debug, Parser)]
pub struct KillChainArgs {
    /// Relationship verb
    pub verb: String,
}

/// Arguments for the status command.
#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Flag value (true, false or null)
    #[arg(value_parser = parse_status)]
    pub status: BooleanDisplayStatus,

    /// Label shown for true and false
    pub label: String,

    /// Chip variant (default or inList)
    #[arg(long, default_value = "default")]
    pub variant: String,
}

/// Arguments for the table command.
#[derive(Debug, Parser)]
pub struct TableArgs {
    /// Dump the cyber observable table
    #[arg(short, long)]
    pub observable: bool,
}

/// Arguments for locale management.
#[derive(Debug, Parser)]
pub struct LocaleArgs {
    #[command(subcommand)]
    pub action: LocaleAction,
}

/// Locale management actions.
#[derive(Debug, Subcommand)]
pub enum LocaleAction {
    /// List all locales
    List,

    /// Show active locale
    Show,

    /// Switch to a different locale
    Switch {
        /// Locale name
        name: String,
    },

    /// Create or update a translation
    Set {
        /// Locale name
        name: String,
        /// Message key (e.g. "Not applicable")
        key: String,
        /// Translated text
        value: String,
    },

    /// Delete a locale
    Delete {
        /// Locale name
        name: String,
    },
}

/// Parse a tri-state status argument.
pub fn parse_status(s: &str) -> Result<BooleanDisplayStatus, String> {
    s.parse()
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
