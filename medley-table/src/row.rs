//! A table row bound to one filesystem entry.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use medley_services::filesystem::{FileEntry, SharedFileDescriptor};

/// Resolution state of a row's icon.
///
/// Transitions are strictly forward: Unresolved -> Scheduled ->
/// Resolved, never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IconState {
    /// No resolution attempted yet.
    Unresolved,
    /// A background job has been scheduled.
    Scheduled,
    /// The icon is available from the cache.
    Resolved,
}

/// One library entry bound into the table.
///
/// Binding canonicalizes the entry path once; the canonical path is
/// the row's identity and the icon cache key. Canonicalization failure
/// falls back to the raw path.
#[derive(Debug, Clone)]
pub struct FileRow {
    entry: FileEntry,
    name: String,
    extension: String,
    location: PathBuf,
    size: Option<u64>,
    descriptor: Option<SharedFileDescriptor>,
    icon_state: IconState,
}

impl FileRow {
    /// Bind a filesystem entry into a row.
    pub fn bind(entry: FileEntry) -> Self {
        let canonical = entry
            .path
            .canonicalize()
            .unwrap_or_else(|_| entry.path.clone());

        let segment = if entry.name.is_empty() {
            canonical
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string()
        } else {
            entry.name.clone()
        };

        // Directories keep their full name; only files split off an
        // extension.
        let (name, extension) = if entry.is_dir() {
            (segment, String::new())
        } else {
            split_display_name(&segment)
        };

        let location = if entry.is_dir() {
            canonical.clone()
        } else {
            canonical
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| canonical.clone())
        };

        let size = if entry.is_file() {
            Some(entry.metadata.size)
        } else {
            None
        };

        let mut entry = entry;
        entry.path = canonical;

        Self {
            entry,
            name,
            extension,
            location,
            size,
            descriptor: None,
            icon_state: IconState::Unresolved,
        }
    }

    /// Identity of the row: the canonical entry path.
    pub fn identity(&self) -> &Path {
        &self.entry.path
    }

    /// The bound entry, path normalized to the identity.
    pub fn entry(&self) -> &FileEntry {
        &self.entry
    }

    /// Display name, without the extension for files.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File extension; empty for directories, hidden files and files
    /// without a dot in their name.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Directory shown in the location column: the parent for files,
    /// the directory itself for directories.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Size in bytes; `None` for anything that is not a regular file.
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// Modification time, preferring the library descriptor when one is
    /// attached.
    pub fn modified(&self) -> SystemTime {
        self.descriptor
            .as_ref()
            .map(|d| d.modified)
            .unwrap_or(self.entry.metadata.modified)
    }

    /// Attach the library's cached descriptor for this file.
    pub fn set_descriptor(&mut self, descriptor: SharedFileDescriptor) {
        self.descriptor = Some(descriptor);
    }

    /// The attached descriptor, if any.
    pub fn descriptor(&self) -> Option<&SharedFileDescriptor> {
        self.descriptor.as_ref()
    }

    /// Current icon resolution state.
    pub fn icon_state(&self) -> IconState {
        self.icon_state
    }

    /// Advance the icon state. Backward transitions are ignored;
    /// returns whether the state changed.
    pub(crate) fn advance_icon_state(&mut self, next: IconState) -> bool {
        if next > self.icon_state {
            self.icon_state = next;
            true
        } else {
            false
        }
    }
}

/// Split a final path segment into display name and extension.
///
/// The split is on the last `.` in the segment; a leading `.` (hidden
/// files) or a segment without `.` yields an empty extension.
pub fn split_display_name(segment: &str) -> (String, String) {
    match segment.rfind('.') {
        Some(idx) if idx > 0 => (
            segment[..idx].to_string(),
            segment[idx + 1..].to_string(),
        ),
        _ => (segment.to_string(), String::new()),
    }
}
