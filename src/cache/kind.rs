//! Resource categories tracked by the cache

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of cached cloud resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Server,
    Image,
    Snapshot,
    Bootscript,
}

impl ResourceKind {
    /// All kinds, in aggregate lookup order
    pub fn all() -> &'static [Self] {
        &[Self::Server, Self::Image, Self::Snapshot, Self::Bootscript]
    }

    /// Whether needles for this kind carry an optional `user/` prefix.
    ///
    /// Images and snapshots are named `user/<name>` when user-owned versus
    /// public; the prefix is stripped before matching.
    pub fn user_scoped(&self) -> bool {
        matches!(self, Self::Image | Self::Snapshot)
    }

    /// Short label, also the CLI spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Image => "image",
            Self::Snapshot => "snapshot",
            Self::Bootscript => "bootscript",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
