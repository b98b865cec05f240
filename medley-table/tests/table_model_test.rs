use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use medley_services::filesystem::{FileEntry, FileMetadata, FileType, SharedFileDescriptor};
use medley_services::icon::{IconError, IconHandle, IconProvider, IconResolver};
use medley_services::playback::{NoPlayback, PlaybackOracle};
use medley_table::{IconState, LibraryColumn, LibraryTableModel, RefreshSink, TableCell};

fn entry(path: &str, file_type: FileType, size: u64) -> FileEntry {
    let path = PathBuf::from(path);
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();
    let parent = path.parent().map(|p| p.to_path_buf());
    FileEntry::new(
        path,
        name.clone(),
        file_type,
        FileMetadata {
            size,
            modified: SystemTime::UNIX_EPOCH,
            mime_type: None,
            is_hidden: name.starts_with('.'),
        },
        parent,
    )
}

/// Sink that records every stale notification.
#[derive(Default)]
struct RecordingSink {
    stale: Mutex<Vec<PathBuf>>,
}

impl RefreshSink for RecordingSink {
    fn mark_stale(&self, identity: &Path) {
        self.stale.lock().unwrap().push(identity.to_path_buf());
    }
}

/// Oracle that reports a single fixed path as playing.
struct FixedOracle {
    playing: PathBuf,
}

impl PlaybackOracle for FixedOracle {
    fn is_playing(&self, path: &Path) -> bool {
        path == self.playing
    }
}

/// Slow counting provider, so completions land after a few paints.
struct SlowProvider {
    calls: AtomicUsize,
    delay: Duration,
}

impl IconProvider for SlowProvider {
    fn is_available(&self, _entry: &FileEntry) -> bool {
        false
    }

    fn icon_for(&self, entry: &FileEntry) -> Result<IconHandle, IconError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        Ok(IconHandle {
            name: format!("icon-{}", entry.name),
            path: None,
        })
    }
}

/// Pump the drain until a row goes stale or the timeout passes.
async fn drain_until_stale(model: &mut LibraryTableModel, wait: Duration) -> usize {
    let deadline = tokio::time::Instant::now() + wait;
    loop {
        let stale = model.drain_icon_events();
        if stale > 0 || tokio::time::Instant::now() >= deadline {
            return stale;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Pump the drain until nothing is pending for `identity`.
async fn drain_until_idle(model: &mut LibraryTableModel, identity: &Path, wait: Duration) {
    let deadline = tokio::time::Instant::now() + wait;
    while model.resolver().is_pending(identity) && tokio::time::Instant::now() < deadline {
        model.drain_icon_events();
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    model.drain_icon_events();
}

#[tokio::test]
async fn test_icon_column_schedules_once_and_notifies_once() {
    let provider = Arc::new(SlowProvider {
        calls: AtomicUsize::new(0),
        delay: Duration::from_millis(100),
    });
    let sink = Arc::new(RecordingSink::default());
    let resolver = Arc::new(IconResolver::new(provider.clone()));
    let mut model = LibraryTableModel::new(resolver, Arc::new(NoPlayback), sink.clone());

    model.set_entries(vec![entry("/tmp/medley-table-test/song.mp3", FileType::File, 1000)]);
    let identity = model.row_at(0).unwrap().identity().to_path_buf();

    // Two paints before completion: still loading, exactly one job.
    assert!(matches!(
        model.value_at(0, LibraryColumn::Icon),
        TableCell::Icon(None)
    ));
    assert!(matches!(
        model.value_at(0, LibraryColumn::Icon),
        TableCell::Icon(None)
    ));
    assert_eq!(model.row_at(0).unwrap().icon_state(), IconState::Scheduled);

    let stale = drain_until_stale(&mut model, Duration::from_secs(5)).await;
    assert_eq!(stale, 1);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(sink.stale.lock().unwrap().as_slice(), &[identity]);
    assert_eq!(model.row_at(0).unwrap().icon_state(), IconState::Resolved);

    match model.value_at(0, LibraryColumn::Icon) {
        TableCell::Icon(Some(icon)) => assert_eq!(icon.name, "icon-song.mp3"),
        other => panic!("expected resolved icon, got {:?}", other),
    }

    // No further notifications once resolved.
    assert_eq!(model.drain_icon_events(), 0);
    assert_eq!(sink.stale.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_destroyed_row_completion_is_absorbed() {
    let provider = Arc::new(SlowProvider {
        calls: AtomicUsize::new(0),
        delay: Duration::from_millis(100),
    });
    let sink = Arc::new(RecordingSink::default());
    let resolver = Arc::new(IconResolver::new(provider));
    let mut model = LibraryTableModel::new(resolver, Arc::new(NoPlayback), sink.clone());

    model.set_entries(vec![entry("/tmp/medley-table-test/gone.mp3", FileType::File, 10)]);
    let identity = model.row_at(0).unwrap().identity().to_path_buf();
    assert!(matches!(
        model.value_at(0, LibraryColumn::Icon),
        TableCell::Icon(None)
    ));

    // Re-root the browser while the job is still in flight.
    model.set_entries(Vec::new());

    drain_until_idle(&mut model, &identity, Duration::from_secs(5)).await;

    // The shared cache keeps the result, but no row went stale.
    assert!(model.resolver().cached(&identity).is_some());
    assert!(sink.stale.lock().unwrap().is_empty());
    assert!(model.is_empty());
}

#[tokio::test]
async fn test_size_cell_is_absent_for_directories() {
    let resolver = Arc::new(IconResolver::new(Arc::new(SlowProvider {
        calls: AtomicUsize::new(0),
        delay: Duration::ZERO,
    })));
    let mut model = LibraryTableModel::new(
        resolver,
        Arc::new(NoPlayback),
        Arc::new(RecordingSink::default()),
    );

    model.set_entries(vec![
        entry("/tmp/medley-table-test/Music", FileType::Directory, 0),
        entry("/tmp/medley-table-test/song.mp3", FileType::File, 1000),
    ]);

    assert!(matches!(
        model.value_at(0, LibraryColumn::Size),
        TableCell::Empty
    ));
    match model.value_at(1, LibraryColumn::Size) {
        TableCell::Text(cell) => assert_eq!(cell.text, "1000 B"),
        other => panic!("expected size text, got {:?}", other),
    }
}

#[tokio::test]
async fn test_type_and_location_cells() {
    let resolver = Arc::new(IconResolver::new(Arc::new(SlowProvider {
        calls: AtomicUsize::new(0),
        delay: Duration::ZERO,
    })));
    let mut model = LibraryTableModel::new(
        resolver,
        Arc::new(NoPlayback),
        Arc::new(RecordingSink::default()),
    );
    model.set_entries(vec![entry("/tmp/medley-table-test/song.mp3", FileType::File, 1)]);

    match model.value_at(0, LibraryColumn::Type) {
        TableCell::Text(cell) => assert_eq!(cell.text, "mp3"),
        other => panic!("expected type text, got {:?}", other),
    }
    match model.value_at(0, LibraryColumn::Name) {
        TableCell::Text(cell) => assert_eq!(cell.text, "song"),
        other => panic!("expected name text, got {:?}", other),
    }
    match model.value_at(0, LibraryColumn::Location) {
        TableCell::Text(cell) => assert_eq!(cell.text, "/tmp/medley-table-test"),
        other => panic!("expected location text, got {:?}", other),
    }
}

#[tokio::test]
async fn test_playing_flag_propagates_into_cells() {
    let playing = PathBuf::from("/tmp/medley-table-test/song.mp3");
    let resolver = Arc::new(IconResolver::new(Arc::new(SlowProvider {
        calls: AtomicUsize::new(0),
        delay: Duration::ZERO,
    })));
    let mut model = LibraryTableModel::new(
        resolver,
        Arc::new(FixedOracle {
            playing: playing.clone(),
        }),
        Arc::new(RecordingSink::default()),
    );
    model.set_entries(vec![
        entry("/tmp/medley-table-test/song.mp3", FileType::File, 1),
        entry("/tmp/medley-table-test/other.mp3", FileType::File, 1),
    ]);

    match model.value_at(0, LibraryColumn::Name) {
        TableCell::Text(cell) => assert!(cell.playing),
        other => panic!("expected name text, got {:?}", other),
    }
    match model.value_at(1, LibraryColumn::Name) {
        TableCell::Text(cell) => assert!(!cell.playing),
        other => panic!("expected name text, got {:?}", other),
    }
}

#[tokio::test]
async fn test_descriptor_timestamp_feeds_modified_cell() {
    let resolver = Arc::new(IconResolver::new(Arc::new(SlowProvider {
        calls: AtomicUsize::new(0),
        delay: Duration::ZERO,
    })));
    let mut model = LibraryTableModel::new(
        resolver,
        Arc::new(NoPlayback),
        Arc::new(RecordingSink::default()),
    );
    model.set_entries(vec![entry("/tmp/medley-table-test/song.mp3", FileType::File, 1)]);

    let indexed = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
    let attached = model.attach_descriptor(SharedFileDescriptor::new(
        PathBuf::from("/tmp/medley-table-test/song.mp3"),
        1,
        indexed,
    ));
    assert!(attached);
    assert_eq!(model.row_at(0).unwrap().modified(), indexed);
}

#[tokio::test]
async fn test_columns_defaults() {
    let resolver = Arc::new(IconResolver::new(Arc::new(SlowProvider {
        calls: AtomicUsize::new(0),
        delay: Duration::ZERO,
    })));
    let model = LibraryTableModel::new(
        resolver,
        Arc::new(NoPlayback),
        Arc::new(RecordingSink::default()),
    );

    let columns = model.columns();
    assert_eq!(columns.len(), 6);
    assert_eq!(columns.type_ahead_column(), LibraryColumn::Name);
    assert!(!columns.is_clippable(LibraryColumn::Icon));
    assert!(columns.is_clippable(LibraryColumn::Name));
    // Modified is hidden by default.
    assert!(!columns.spec(LibraryColumn::Modified).visible);
    assert_eq!(columns.visible().count(), 5);
}
