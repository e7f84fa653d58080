//! Status command - cache location and per-category entry counts

use crate::cache::{IdentifierCache, ResourceKind};
use crate::cli::args::{OutputFormat, StatusArgs};
use crate::error::CacheResult;
use chrono::{DateTime, Utc};
use std::fs;

/// Execute the status command
pub fn execute(args: StatusArgs, cache: &IdentifierCache) -> CacheResult<()> {
    match args.format {
        OutputFormat::Table => print_table(cache),
        OutputFormat::Json => print_json(cache)?,
        OutputFormat::Plain => print_plain(cache),
    }
    Ok(())
}

fn file_details(cache: &IdentifierCache) -> Option<(u64, Option<DateTime<Utc>>)> {
    let meta = fs::metadata(cache.path()).ok()?;
    Some((meta.len(), meta.modified().ok().map(DateTime::from)))
}

fn print_table(cache: &IdentifierCache) {
    println!("Cache: {}", cache.path().display());
    match file_details(cache) {
        Some((size, modified)) => {
            let when = modified
                .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!("File:  {} bytes, written {}", size, when);
        }
        None => println!("File:  not yet written"),
    }
    println!();

    println!("{:<12} {:<8}", "KIND", "ENTRIES");
    println!("{}", "-".repeat(20));

    let mut total = 0;
    for &kind in ResourceKind::all() {
        let count = cache.len(kind);
        total += count;
        println!("{:<12} {:<8}", kind, count);
    }

    println!();
    println!("Total: {} entry(ies)", total);
}

fn print_json(cache: &IdentifierCache) -> CacheResult<()> {
    #[derive(serde::Serialize)]
    struct StatusJson {
        path: String,
        file_size: Option<u64>,
        written_at: Option<String>,
        servers: usize,
        images: usize,
        snapshots: usize,
        bootscripts: usize,
    }

    let details = file_details(cache);
    let status = StatusJson {
        path: cache.path().display().to_string(),
        file_size: details.map(|(size, _)| size),
        written_at: details
            .and_then(|(_, modified)| modified)
            .map(|m| m.to_rfc3339()),
        servers: cache.len(ResourceKind::Server),
        images: cache.len(ResourceKind::Image),
        snapshots: cache.len(ResourceKind::Snapshot),
        bootscripts: cache.len(ResourceKind::Bootscript),
    };

    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

fn print_plain(cache: &IdentifierCache) {
    for &kind in ResourceKind::all() {
        println!("{} {}", kind, cache.len(kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CACHE_FILE_NAME;
    use tempfile::TempDir;

    #[test]
    fn status_runs_on_unwritten_cache() {
        let temp = TempDir::new().unwrap();
        let cache = IdentifierCache::load_from(temp.path().join(CACHE_FILE_NAME)).unwrap();

        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Plain] {
            assert!(execute(StatusArgs { format }, &cache).is_ok());
        }
    }
}
