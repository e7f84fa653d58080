//! Clear command - empty one category, or all of them

use crate::cache::{IdentifierCache, ResourceKind};
use crate::cli::args::ClearArgs;
use crate::error::CacheResult;
use console::style;

/// Execute the clear command
pub fn execute(args: ClearArgs, cache: &IdentifierCache) -> CacheResult<()> {
    let kinds: Vec<ResourceKind> = if args.all {
        ResourceKind::all().to_vec()
    } else {
        // clap guarantees kind is present when --all is absent
        args.kind.map(ResourceKind::from).into_iter().collect()
    };

    let mut dropped = 0;
    for kind in kinds {
        dropped += cache.len(kind);
        cache.clear(kind);
    }

    println!("{} cleared {} entry(ies)", style("✓").green(), dropped);
    Ok(())
}
