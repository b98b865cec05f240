//! Cached descriptors from the share index.

use std::path::PathBuf;
use std::time::SystemTime;

/// The library's cached descriptor for a shared file.
///
/// The share index keeps one of these per indexed file. A table row
/// with an attached descriptor prefers its timestamp over a fresh
/// filesystem stat, on the assumption the index keeps it up to date.
#[derive(Debug, Clone)]
pub struct SharedFileDescriptor {
    /// Path of the shared file.
    pub path: PathBuf,
    /// Size in bytes recorded when the file was indexed.
    pub size: u64,
    /// Modification time recorded when the file was indexed.
    pub modified: SystemTime,
    /// Content URN of the file, once hashing has completed.
    pub urn: Option<String>,
}

impl SharedFileDescriptor {
    /// Create a descriptor for a freshly indexed file.
    pub fn new(path: PathBuf, size: u64, modified: SystemTime) -> Self {
        Self {
            path,
            size,
            modified,
            urn: None,
        }
    }

    /// Attach the content URN produced by the hashing stage.
    pub fn with_urn(mut self, urn: String) -> Self {
        self.urn = Some(urn);
        self
    }
}
