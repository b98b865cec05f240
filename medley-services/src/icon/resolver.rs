// SPDX-License-Identifier: LGPL-3.0-only
//! Lazy, de-duplicated icon resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use crate::filesystem::entry::FileEntry;
use crate::icon::cache::{IconCache, DEFAULT_CACHE_CAPACITY};
use crate::icon::events::IconEvent;
use crate::icon::executor::ResolveExecutor;
use crate::icon::{IconHandle, IconProvider};

/// Configuration for an [`IconResolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Number of resolved icons kept in memory.
    pub cache_capacity: usize,
    /// Buffered completion events before subscribers start lagging.
    pub event_capacity: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            event_capacity: 100,
        }
    }
}

/// Lazily resolves row icons, scheduling at most one background job per
/// identity.
///
/// [`IconResolver::resolve`] never blocks: it answers from the cache or
/// the provider's cheap path, or schedules a job and returns `None`.
/// Completions are applied on the presentation thread via
/// [`IconResolver::apply`], which is the single writer of the cache.
///
/// Owned per table/list controller; there is no process-global resolver
/// state.
pub struct IconResolver {
    provider: Arc<dyn IconProvider>,
    cache: IconCache,
    pending: Mutex<HashSet<PathBuf>>,
    executor: ResolveExecutor,
}

impl IconResolver {
    /// Create a resolver with the default configuration.
    pub fn new(provider: Arc<dyn IconProvider>) -> Self {
        Self::with_config(provider, ResolverConfig::default())
    }

    /// Create a resolver with an explicit configuration.
    pub fn with_config(provider: Arc<dyn IconProvider>, config: ResolverConfig) -> Self {
        let executor = ResolveExecutor::new(provider.clone(), config.event_capacity);
        Self {
            provider,
            cache: IconCache::new(config.cache_capacity),
            pending: Mutex::new(HashSet::new()),
            executor,
        }
    }

    /// Resolve the icon for an entry, scheduling a background job on
    /// the first miss.
    ///
    /// The entry's path is its identity and must already be canonical
    /// (rows canonicalize once at bind time). Returns `None` while a
    /// job is in flight; a second call before completion does not queue
    /// a duplicate.
    pub fn resolve(&self, entry: &FileEntry) -> Option<IconHandle> {
        if let Some(icon) = self.cache.get(&entry.path) {
            return Some(icon);
        }

        if self.provider.is_available(entry) {
            match self.provider.icon_for(entry) {
                Ok(icon) => {
                    self.cache.put(entry.path.clone(), icon.clone());
                    return Some(icon);
                }
                Err(e) => {
                    log::debug!("available icon failed to load for {:?}: {}", entry.path, e);
                    return None;
                }
            }
        }

        let mut pending = self.pending.lock().unwrap();
        if pending.contains(&entry.path) {
            return None;
        }
        if let Err(e) = self.executor.submit(entry.clone()) {
            log::warn!("failed to queue icon resolution for {:?}: {}", entry.path, e);
            return None;
        }
        pending.insert(entry.path.clone());
        None
    }

    /// Whether a job is currently in flight for the identity.
    pub fn is_pending(&self, identity: &Path) -> bool {
        self.pending.lock().unwrap().contains(identity)
    }

    /// Apply a completion event.
    ///
    /// Must run on the presentation thread. A `Failed` event clears the
    /// in-flight mark without touching the cache, so a later
    /// [`IconResolver::resolve`] call may schedule a fresh job.
    pub fn apply(&self, event: &IconEvent) {
        match event {
            IconEvent::Resolved { path, icon } => {
                self.cache.put(path.clone(), icon.clone());
                self.pending.lock().unwrap().remove(path);
            }
            IconEvent::Failed { path, error } => {
                log::debug!("icon resolution failed for {:?}: {}", path, error);
                self.pending.lock().unwrap().remove(path);
            }
        }
    }

    /// Subscribe to completion events.
    pub fn subscribe(&self) -> broadcast::Receiver<IconEvent> {
        self.executor.subscribe()
    }

    /// Peek at the cache without scheduling anything.
    pub fn cached(&self, identity: &Path) -> Option<IconHandle> {
        self.cache.get(identity)
    }
}
