//! Remove command - drop an identifier after a remote delete

use crate::cache::{IdentifierCache, ResourceKind};
use crate::cli::args::RemoveArgs;
use crate::error::CacheResult;
use console::style;

/// Execute the remove command
pub fn execute(args: RemoveArgs, cache: &IdentifierCache) -> CacheResult<()> {
    let kind = ResourceKind::from(args.kind);
    cache.remove(kind, &args.identifier);

    println!(
        "{} removed {} {}",
        style("✓").green(),
        kind,
        args.identifier
    );
    Ok(())
}
