//! Playback status seam.

use std::path::Path;

/// Read-only oracle for whether a file is currently being played.
///
/// Consulted when display cells are produced so the playing row can be
/// highlighted. Implementations must be cheap and side-effect free;
/// they run on the presentation thread once per visible cell.
pub trait PlaybackOracle: Send + Sync {
    /// Whether the given file is the one currently playing.
    fn is_playing(&self, path: &Path) -> bool;
}

/// Oracle for embeddings without an audio player. Nothing ever plays.
#[derive(Debug, Default)]
pub struct NoPlayback;

impl PlaybackOracle for NoPlayback {
    fn is_playing(&self, _path: &Path) -> bool {
        false
    }
}
