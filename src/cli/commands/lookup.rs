//! Lookup command - resolve a reference to cached identifiers

use crate::cache::{CachedIdentifier, IdentifierCache};
use crate::cli::args::{LookupArgs, OutputFormat};
use crate::error::CacheResult;

/// Execute the lookup command
pub fn execute(args: LookupArgs, cache: &IdentifierCache) -> CacheResult<()> {
    let hits: Vec<CachedIdentifier> = match args.kind {
        Some(kind) => {
            let kind = kind.into();
            cache
                .lookup(kind, &args.needle)
                .into_iter()
                .map(|identifier| CachedIdentifier { identifier, kind })
                .collect()
        }
        None => cache.lookup_identifiers(&args.needle),
    };

    if hits.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&hits),
        OutputFormat::Json => print_json(&hits)?,
        OutputFormat::Plain => print_plain(&hits),
    }

    Ok(())
}

fn print_table(hits: &[CachedIdentifier]) {
    println!("{:<40} {:<12}", "IDENTIFIER", "KIND");
    println!("{}", "-".repeat(52));

    for hit in hits {
        println!("{:<40} {:<12}", hit.identifier, hit.kind);
    }

    println!();
    println!("Total: {} match(es)", hits.len());
}

fn print_json(hits: &[CachedIdentifier]) -> CacheResult<()> {
    println!("{}", serde_json::to_string_pretty(hits)?);
    Ok(())
}

fn print_plain(hits: &[CachedIdentifier]) {
    for hit in hits {
        println!("{}", hit.identifier);
    }
}
