//! scw-cache - per-user identifier resolution cache
//!
//! Lets cloud resources (servers, images, snapshots, bootscripts) be
//! referred to by a short, partial or fuzzy name instead of a full
//! opaque identifier, without a remote round-trip per invocation.

pub mod cache;
pub mod cli;
pub mod error;

pub use cache::{CachedIdentifier, IdentifierCache, NeedlePattern, ResourceKind};
pub use error::{CacheError, CacheResult};
