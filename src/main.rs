//! scw-cache - per-user resource identifier cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use scw_cache::cache::{default_cache_path, IdentifierCache};
use scw_cache::cli::{commands, Cli, Commands};
use scw_cache::error::CacheResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> CacheResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("scw_cache=warn"),
        1 => EnvFilter::new("scw_cache=info"),
        _ => EnvFilter::new("scw_cache=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Completion doesn't need the cache
    if let Commands::Completion(args) = cli.command {
        return commands::completion(args);
    }

    let cache_path = cli.cache_file.unwrap_or_else(default_cache_path);

    // Print the path without loading it: must work on a corrupt cache too
    if matches!(cli.command, Commands::Path) {
        println!("{}", cache_path.display());
        return Ok(());
    }

    let cache = IdentifierCache::load_from(cache_path)?;
    debug!("cache ready at {}", cache.path().display());

    match cli.command {
        Commands::Lookup(args) => commands::lookup(args, &cache)?,
        Commands::Insert(args) => commands::insert(args, &cache)?,
        Commands::Remove(args) => commands::remove(args, &cache)?,
        Commands::Clear(args) => commands::clear(args, &cache)?,
        Commands::Status(args) => commands::status(args, &cache)?,
        Commands::Path | Commands::Completion(_) => unreachable!("handled above"),
    }

    // Shutdown flush is unconditional; a clean cache makes it a no-op
    cache.save()
}
