#![warn(missing_docs)]

//! Library-browser core for the medley file-sharing client.
//!
//! This crate bundles the non-rendering pieces of the library browser:
//! the filesystem entry model and icon-resolution services
//! ([`services`]) and the table adapter that binds entries into rows
//! ([`table`]). Rendering, directory traversal and playback tracking
//! are supplied by the embedding application through trait seams.

pub use medley_services as services;
pub use medley_table as table;

/// A "prelude" for embedders of the medley browser core.
///
/// Importing this module brings into scope the most common types needed
/// to drive a library table.
///
/// ```rust
/// use medley::prelude::*;
/// ```
pub mod prelude {
    pub use crate::services::filesystem::{
        FileEntry, FileLister, FileMetadata, FileType, SharedFileDescriptor,
    };
    pub use crate::services::icon::{
        IconEvent, IconHandle, IconProvider, IconResolver, MimeIconProvider, ResolverConfig,
    };
    pub use crate::services::playback::{NoPlayback, PlaybackOracle};

    pub use crate::table::cell::{PlayableCell, SizeDisplay, TableCell};
    pub use crate::table::columns::{ColumnSpec, LibraryColumn, TableColumns};
    pub use crate::table::model::{LibraryTableModel, RefreshSink};
    pub use crate::table::row::{FileRow, IconState};
}
