//! Library table model: rows, lazy icon resolution, stale notification.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use medley_services::filesystem::{FileEntry, SharedFileDescriptor};
use medley_services::icon::{IconEvent, IconResolver};
use medley_services::playback::PlaybackOracle;

use crate::cell::{format_modified, PlayableCell, SizeDisplay, TableCell};
use crate::columns::{LibraryColumn, TableColumns};
use crate::row::{FileRow, IconState};

/// Presentation-layer sink for repaint requests.
pub trait RefreshSink: Send + Sync {
    /// The row for `identity` must be redrawn on the next paint cycle.
    fn mark_stale(&self, identity: &Path);
}

/// Table model over the library rows of one browser.
///
/// Single-threaded by design: every method runs on the presentation
/// thread. Background icon work is delegated to the resolver, and its
/// completions are pulled in by [`LibraryTableModel::drain_icon_events`]
/// once per frame.
pub struct LibraryTableModel {
    rows: IndexMap<PathBuf, FileRow>,
    columns: TableColumns,
    resolver: Arc<IconResolver>,
    icon_events: broadcast::Receiver<IconEvent>,
    oracle: Arc<dyn PlaybackOracle>,
    sink: Arc<dyn RefreshSink>,
}

impl LibraryTableModel {
    /// Create a model over an empty listing.
    pub fn new(
        resolver: Arc<IconResolver>,
        oracle: Arc<dyn PlaybackOracle>,
        sink: Arc<dyn RefreshSink>,
    ) -> Self {
        let icon_events = resolver.subscribe();
        Self {
            rows: IndexMap::new(),
            columns: TableColumns::new(),
            resolver,
            icon_events,
            oracle,
            sink,
        }
    }

    /// Bind a fresh listing, destroying rows absent from it.
    ///
    /// Called when the browser is re-rooted, filtered or refreshed.
    /// In-flight resolutions for destroyed rows keep running; their
    /// completions are absorbed by the drain.
    pub fn set_entries(&mut self, entries: Vec<FileEntry>) {
        let mut rows = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let row = FileRow::bind(entry);
            rows.insert(row.identity().to_path_buf(), row);
        }
        self.rows = rows;
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at a display index.
    pub fn row_at(&self, index: usize) -> Option<&FileRow> {
        self.rows.get_index(index).map(|(_, row)| row)
    }

    /// Row for an identity.
    pub fn row(&self, identity: &Path) -> Option<&FileRow> {
        self.rows.get(identity)
    }

    /// Display index of an identity.
    pub fn index_of(&self, identity: &Path) -> Option<usize> {
        self.rows.get_index_of(identity)
    }

    /// The column layout.
    pub fn columns(&self) -> &TableColumns {
        &self.columns
    }

    /// Mutable access to the column layout.
    pub fn columns_mut(&mut self) -> &mut TableColumns {
        &mut self.columns
    }

    /// The resolver backing the icon column.
    pub fn resolver(&self) -> &IconResolver {
        &self.resolver
    }

    /// Attach a library descriptor to its row. Returns whether a bound
    /// row matched the descriptor's path.
    pub fn attach_descriptor(&mut self, descriptor: SharedFileDescriptor) -> bool {
        let identity = descriptor
            .path
            .canonicalize()
            .unwrap_or_else(|_| descriptor.path.clone());
        match self.rows.get_mut(&identity) {
            Some(row) => {
                row.set_descriptor(descriptor);
                true
            }
            None => false,
        }
    }

    /// Produce the value for one cell.
    ///
    /// The icon column is where lazy resolution happens: a cache miss
    /// schedules one background job and yields `Icon(None)` until the
    /// completion is drained. Repeated paints before completion do not
    /// queue duplicates.
    pub fn value_at(&mut self, index: usize, column: LibraryColumn) -> TableCell {
        let row = match self.rows.get_index_mut(index) {
            Some((_, row)) => row,
            None => return TableCell::Empty,
        };
        let playing = self.oracle.is_playing(row.identity());

        match column {
            LibraryColumn::Icon => match self.resolver.resolve(row.entry()) {
                Some(icon) => {
                    row.advance_icon_state(IconState::Resolved);
                    TableCell::Icon(Some(icon))
                }
                None => {
                    if self.resolver.is_pending(row.identity()) {
                        row.advance_icon_state(IconState::Scheduled);
                    }
                    TableCell::Icon(None)
                }
            },
            LibraryColumn::Name => TableCell::Text(PlayableCell::new(row.name(), playing)),
            LibraryColumn::Size => match row.size() {
                Some(bytes) => TableCell::Text(PlayableCell::new(
                    SizeDisplay::new(bytes).to_string(),
                    playing,
                )),
                None => TableCell::Empty,
            },
            LibraryColumn::Type => TableCell::Text(PlayableCell::new(row.extension(), playing)),
            LibraryColumn::Location => TableCell::Text(PlayableCell::new(
                row.location().display().to_string(),
                playing,
            )),
            LibraryColumn::Modified => {
                TableCell::Text(PlayableCell::new(format_modified(row.modified()), playing))
            }
        }
    }

    /// Drain completed resolutions; returns the number of rows marked
    /// stale.
    ///
    /// Call once per frame on the presentation thread. Completions for
    /// identities no longer bound still populate the shared cache but
    /// touch no row and fire no notification. Each successful
    /// resolution of a live row fires exactly one
    /// [`RefreshSink::mark_stale`].
    pub fn drain_icon_events(&mut self) -> usize {
        let mut stale = 0;
        loop {
            match self.icon_events.try_recv() {
                Ok(event) => {
                    self.resolver.apply(&event);
                    if let IconEvent::Resolved { path, .. } = &event {
                        if let Some(row) = self.rows.get_mut(path) {
                            if row.advance_icon_state(IconState::Resolved) {
                                self.sink.mark_stale(path);
                                stale += 1;
                            }
                        }
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    log::warn!("icon event receiver lagged, {} events dropped", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        stale
    }
}
