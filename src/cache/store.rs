//! The on-disk identifier cache
//!
//! One JSON document per user, loaded once at process start, mutated as
//! commands run, flushed at most once at shutdown. Lookup, mutation and
//! persistence all serialize on a single coarse lock; the inventory is
//! small enough that contention is not a concern.

use crate::cache::kind::ResourceKind;
use crate::cache::matcher::NeedlePattern;
use crate::error::{CacheError, CacheResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::{env, fs};
use tempfile::NamedTempFile;
use tracing::debug;

/// File name of the persisted cache, under the user's home directory
pub const CACHE_FILE_NAME: &str = ".scw-cache.db";

/// Default location of the cache file: the home directory, or the process
/// temp directory for environments without one
pub fn default_cache_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(env::temp_dir)
        .join(CACHE_FILE_NAME)
}

/// An identifier found by an aggregate lookup, tagged with its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedIdentifier {
    pub identifier: String,
    pub kind: ResourceKind,
}

/// The serialized document: four identifier -> name maps.
///
/// The dirty flag never reaches disk. Absent or `null` categories in older
/// or partially written files decode as empty maps.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheData {
    #[serde(default, deserialize_with = "null_as_empty")]
    images: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    snapshots: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    bootscripts: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    servers: HashMap<String, String>,

    #[serde(skip)]
    modified: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<HashMap<String, String>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

impl CacheData {
    fn map(&self, kind: ResourceKind) -> &HashMap<String, String> {
        match kind {
            ResourceKind::Server => &self.servers,
            ResourceKind::Image => &self.images,
            ResourceKind::Snapshot => &self.snapshots,
            ResourceKind::Bootscript => &self.bootscripts,
        }
    }

    fn map_mut(&mut self, kind: ResourceKind) -> &mut HashMap<String, String> {
        match kind {
            ResourceKind::Server => &mut self.servers,
            ResourceKind::Image => &mut self.images,
            ResourceKind::Snapshot => &mut self.snapshots,
            ResourceKind::Bootscript => &mut self.bootscripts,
        }
    }
}

/// Per-user cache of resource identifiers, indexed by category
pub struct IdentifierCache {
    path: PathBuf,
    state: Mutex<CacheData>,
}

impl IdentifierCache {
    /// Load the cache from its default per-user location
    pub fn load() -> CacheResult<Self> {
        Self::load_from(default_cache_path())
    }

    /// Load the cache from an explicit path.
    ///
    /// A missing file yields an empty cache; that is the normal first-run
    /// state, not an error. A file that exists but cannot be read or
    /// decoded is propagated so callers fail instead of silently resolving
    /// against nothing.
    pub fn load_from(path: impl Into<PathBuf>) -> CacheResult<Self> {
        let path = path.into();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no cache file at {}, starting empty", path.display());
                return Ok(Self {
                    path,
                    state: Mutex::new(CacheData::default()),
                });
            }
            Err(e) => {
                return Err(CacheError::io(
                    format!("reading cache file {}", path.display()),
                    e,
                ))
            }
        };

        let data: CacheData = serde_json::from_slice(&bytes).map_err(|source| {
            CacheError::Corrupt {
                path: path.clone(),
                source,
            }
        })?;

        debug!("loaded cache from {}", path.display());
        Ok(Self {
            path,
            state: Mutex::new(data),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether unsaved mutations are pending
    pub fn is_dirty(&self) -> bool {
        self.state().modified
    }

    // A poisoned lock hands back the inner state: the cache is advisory
    // lookup data and must not take resolution down with a panicking caller.
    fn state(&self) -> MutexGuard<'_, CacheData> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return identifiers in `kind` matching `needle`.
    ///
    /// An entry matches when its identifier starts with the needle, or its
    /// display name matches the needle fuzzily (see [`NeedlePattern`]). For
    /// user-scoped kinds a leading `user/` on the needle is dropped first.
    /// Order follows map iteration and is not stable across calls.
    pub fn lookup(&self, kind: ResourceKind, needle: &str) -> Vec<String> {
        let needle = if kind.user_scoped() {
            needle.strip_prefix("user/").unwrap_or(needle)
        } else {
            needle
        };
        let pattern = NeedlePattern::new(needle);

        let state = self.state();
        state
            .map(kind)
            .iter()
            .filter(|(identifier, name)| identifier.starts_with(needle) || pattern.matches(name))
            .map(|(identifier, _)| identifier.clone())
            .collect()
    }

    /// Resolve `needle` across all four categories, tagging each hit with
    /// its kind. Results concatenate in kind order; identifiers present in
    /// several categories show up once per category.
    pub fn lookup_identifiers(&self, needle: &str) -> Vec<CachedIdentifier> {
        let mut result = Vec::new();
        for &kind in ResourceKind::all() {
            result.extend(
                self.lookup(kind, needle)
                    .into_iter()
                    .map(|identifier| CachedIdentifier { identifier, kind }),
            );
        }
        result
    }

    /// Register or refresh an identifier. Re-inserting an unchanged pair is
    /// a no-op and does not mark the cache dirty, so commands can re-insert
    /// whatever the API returned without forcing a rewrite at shutdown.
    pub fn insert(&self, kind: ResourceKind, identifier: &str, name: &str) {
        let mut state = self.state();
        if state.map(kind).get(identifier).map(String::as_str) != Some(name) {
            debug!("cache insert {} {} = {:?}", kind, identifier, name);
            state
                .map_mut(kind)
                .insert(identifier.to_owned(), name.to_owned());
            state.modified = true;
        }
    }

    /// Drop an identifier from a category
    pub fn remove(&self, kind: ResourceKind, identifier: &str) {
        let mut state = self.state();
        state.map_mut(kind).remove(identifier);
        state.modified = true;
    }

    /// Empty one category, leaving the other three untouched
    pub fn clear(&self, kind: ResourceKind) {
        let mut state = self.state();
        *state.map_mut(kind) = HashMap::new();
        state.modified = true;
    }

    /// Number of entries in a category
    pub fn len(&self, kind: ResourceKind) -> usize {
        self.state().map(kind).len()
    }

    /// Whether a category holds no entries
    pub fn is_empty(&self, kind: ResourceKind) -> bool {
        self.len(kind) == 0
    }

    /// Snapshot of a category's (identifier, name) pairs
    pub fn entries(&self, kind: ResourceKind) -> Vec<(String, String)> {
        self.state()
            .map(kind)
            .iter()
            .map(|(identifier, name)| (identifier.clone(), name.clone()))
            .collect()
    }

    /// Flush pending mutations to disk.
    ///
    /// No-op when clean. Otherwise the document is written to a fresh temp
    /// file and renamed over the target, so a reader never observes a
    /// partial file and a failed save leaves the previous one intact.
    pub fn save(&self) -> CacheResult<()> {
        let mut state = self.state();
        if !state.modified {
            return Ok(());
        }

        let file = NamedTempFile::new()
            .map_err(|e| CacheError::io("creating temp cache file", e))?;
        serde_json::to_writer(file.as_file(), &*state)?;
        file.persist(&self.path).map_err(|e| {
            CacheError::io(
                format!("replacing cache file {}", self.path.display()),
                e.error,
            )
        })?;

        state.modified = false;
        debug!("flushed cache to {}", self.path.display());
        Ok(())
    }
}
