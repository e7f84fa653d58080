//! Insert command - register an identifier after a remote create

use crate::cache::{IdentifierCache, ResourceKind};
use crate::cli::args::InsertArgs;
use crate::error::CacheResult;
use console::style;

/// Execute the insert command
pub fn execute(args: InsertArgs, cache: &IdentifierCache) -> CacheResult<()> {
    let kind = ResourceKind::from(args.kind);
    cache.insert(kind, &args.identifier, &args.name);

    println!(
        "{} cached {} {} as {:?}",
        style("✓").green(),
        kind,
        args.identifier,
        args.name
    );
    Ok(())
}
