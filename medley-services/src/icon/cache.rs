// SPDX-License-Identifier: LGPL-3.0-only
//! In-memory cache of resolved icons, keyed by entry identity.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::icon::IconHandle;

/// Default number of resolved icons kept in memory.
pub(crate) const DEFAULT_CACHE_CAPACITY: usize = 2000;

/// Thread-safe identity -> icon cache with LRU eviction.
///
/// Shared across all rows of a table. Writes happen only when a
/// resolution completes, on the presentation thread; reads happen on
/// every paint of every row.
pub struct IconCache {
    icons: Mutex<LruCache<PathBuf, IconHandle>>,
}

impl IconCache {
    /// Create a new cache holding up to `capacity` icons.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            icons: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Get the cached icon for an identity.
    pub fn get(&self, identity: &Path) -> Option<IconHandle> {
        self.icons.lock().unwrap().get(identity).cloned()
    }

    /// Store a resolved icon.
    pub fn put(&self, identity: PathBuf, icon: IconHandle) {
        self.icons.lock().unwrap().put(identity, icon);
    }

    /// Check if an identity has a cached icon.
    pub fn contains(&self, identity: &Path) -> bool {
        self.icons.lock().unwrap().contains(identity)
    }

    /// Number of cached icons.
    pub fn len(&self) -> usize {
        self.icons.lock().unwrap().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.icons.lock().unwrap().is_empty()
    }

    /// Clear the cache.
    pub fn clear(&self) {
        self.icons.lock().unwrap().clear();
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
