// SPDX-License-Identifier: LGPL-3.0-only
pub mod filesystem;
pub mod icon;
pub mod playback;

// Re-export the types embedders touch most often
pub use filesystem::{FileEntry, FileMetadata, FileType, SharedFileDescriptor};
pub use icon::{IconHandle, IconProvider, IconResolver};
pub use playback::{NoPlayback, PlaybackOracle};
