//! CLI argument definitions using clap derive

use crate::cache::ResourceKind;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// scw-cache - local resource identifier cache
///
/// Resolves short, partial or fuzzy resource references against the
/// per-user cache, and keeps the cache in step with remote operations.
#[derive(Parser, Debug)]
#[command(name = "scw-cache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Cache file path (defaults to ~/.scw-cache.db)
    #[arg(long, global = true, env = "SCW_CACHE_FILE")]
    pub cache_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a reference to matching cached identifiers
    Lookup(LookupArgs),

    /// Register or refresh an identifier
    Insert(InsertArgs),

    /// Remove an identifier from a category
    Remove(RemoveArgs),

    /// Empty one category, or the whole cache
    Clear(ClearArgs),

    /// Show cache location and per-category entry counts
    Status(StatusArgs),

    /// Print the cache file path
    Path,

    /// Generate shell completions
    Completion(CompletionArgs),
}

/// Arguments for the lookup command
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Partial identifier or fuzzy name; empty matches everything
    #[arg(default_value = "")]
    pub needle: String,

    /// Restrict the lookup to one category
    #[arg(short, long)]
    pub kind: Option<KindArg>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the insert command
#[derive(Parser, Debug)]
pub struct InsertArgs {
    /// Resource category
    pub kind: KindArg,

    /// Full identifier as returned by the API
    pub identifier: String,

    /// Display name to index under
    pub name: String,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Resource category
    pub kind: KindArg,

    /// Identifier to drop
    pub identifier: String,
}

/// Arguments for the clear command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Category to empty
    #[arg(required_unless_present = "all")]
    pub kind: Option<KindArg>,

    /// Empty all four categories
    #[arg(long, conflicts_with = "kind")]
    pub all: bool,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the completion command
#[derive(Parser, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Output format for lookup and status
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

/// Resource category as spelled on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Server,
    Image,
    Snapshot,
    Bootscript,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Server => Self::Server,
            KindArg::Image => Self::Image,
            KindArg::Snapshot => Self::Snapshot,
            KindArg::Bootscript => Self::Bootscript,
        }
    }
}
