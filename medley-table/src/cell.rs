//! Display cells produced by the table model.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use humansize::{format_size, BINARY};

use medley_services::icon::IconHandle;

/// Human-readable byte count for the size column.
///
/// Keeps the raw byte count so sorting never reparses display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SizeDisplay(u64);

impl SizeDisplay {
    /// Wrap a byte count.
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// The raw byte count.
    pub fn bytes(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SizeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_size(self.0, BINARY))
    }
}

/// Text cell carrying the playback flag for highlight rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayableCell {
    /// Cell text.
    pub text: String,
    /// Whether this row's file is currently playing.
    pub playing: bool,
}

impl PlayableCell {
    /// Create a text cell.
    pub fn new(text: impl Into<String>, playing: bool) -> Self {
        Self {
            text: text.into(),
            playing,
        }
    }
}

/// A value for one table cell.
#[derive(Debug, Clone)]
pub enum TableCell {
    /// Icon column; `None` while resolution is in flight.
    Icon(Option<IconHandle>),
    /// Text column with playback highlight.
    Text(PlayableCell),
    /// Nothing to display (e.g. size of a directory).
    Empty,
}

/// Format a modification time for the modified column.
pub fn format_modified(time: SystemTime) -> String {
    let dt: DateTime<Local> = time.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
