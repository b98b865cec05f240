//! Filesystem entry model for the medley library browser.
//!
//! Supplies the entry and descriptor types that table rows bind to,
//! plus the lister seam the embedding application implements. The
//! browser core never walks the filesystem itself.

pub mod descriptor;
pub mod entry;
pub mod error;
pub mod lister;

// Re-export public API
pub use descriptor::SharedFileDescriptor;
pub use entry::{FileEntry, FileMetadata, FileType};
pub use error::FileSystemError;
pub use lister::FileLister;
