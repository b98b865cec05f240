//! Directory listing seam.

use std::path::Path;

use crate::filesystem::entry::FileEntry;
use crate::filesystem::error::FileSystemError;

/// Collaborator that lists the entries under a root directory.
///
/// The browser core consumes listings; it never traverses the
/// filesystem on its own. The embedding application supplies an
/// implementation backed by whatever lister it already runs.
pub trait FileLister: Send + Sync {
    /// List the entries directly under `root`.
    fn list(&self, root: &Path) -> Result<Vec<FileEntry>, FileSystemError>;
}
