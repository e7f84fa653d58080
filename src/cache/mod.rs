//! Local identifier resolution cache
//!
//! A per-user, disk-persisted index from opaque resource identifiers to
//! display names, split into four independent categories. Commands resolve
//! user-supplied partial references against it instead of querying the
//! remote API, and update it after successful create/list/delete calls.
//!
//! # Guarantees
//!
//! - All four categories exist after construction, whatever the file held
//! - Saves are atomic: write to a temp file, then rename over the target,
//!   so a crash mid-write leaves the previous cache intact
//! - One coarse lock serializes every operation; last `save` wins across
//!   processes
//!
//! Membership says nothing about remote existence - entries can be stale.

pub mod kind;
pub mod matcher;
pub mod store;

pub use kind::ResourceKind;
pub use matcher::NeedlePattern;
pub use store::{default_cache_path, CachedIdentifier, IdentifierCache, CACHE_FILE_NAME};
