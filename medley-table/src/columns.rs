//! Column configuration for the library table.

/// Identifiers for the library table's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryColumn {
    /// File-type icon.
    Icon,
    /// Display name without extension.
    Name,
    /// Human-readable size.
    Size,
    /// File extension.
    Type,
    /// Containing directory.
    Location,
    /// Last modification time.
    Modified,
}

impl LibraryColumn {
    /// All columns in presentation order.
    pub const ALL: [LibraryColumn; 6] = [
        LibraryColumn::Icon,
        LibraryColumn::Name,
        LibraryColumn::Size,
        LibraryColumn::Type,
        LibraryColumn::Location,
        LibraryColumn::Modified,
    ];
}

/// Static description of one column.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Which column this describes.
    pub column: LibraryColumn,
    /// Stable identifier used for persisted layout settings.
    pub id: &'static str,
    /// Header title.
    pub title: &'static str,
    /// Default width in pixels.
    pub width: u32,
    /// Whether the column is shown by default.
    pub visible: bool,
}

/// Column layout owned by one table model.
///
/// Each browser instance carries its own layout; two browsers over
/// different roots can show different columns.
#[derive(Debug, Clone)]
pub struct TableColumns {
    specs: Vec<ColumnSpec>,
}

impl TableColumns {
    /// Create the default library column layout.
    pub fn new() -> Self {
        Self {
            specs: vec![
                ColumnSpec {
                    column: LibraryColumn::Icon,
                    id: "library_icon",
                    title: "Icon",
                    width: 18,
                    visible: true,
                },
                ColumnSpec {
                    column: LibraryColumn::Name,
                    id: "library_name",
                    title: "Name",
                    width: 239,
                    visible: true,
                },
                ColumnSpec {
                    column: LibraryColumn::Size,
                    id: "library_size",
                    title: "Size",
                    width: 62,
                    visible: true,
                },
                ColumnSpec {
                    column: LibraryColumn::Type,
                    id: "library_type",
                    title: "Type",
                    width: 48,
                    visible: true,
                },
                ColumnSpec {
                    column: LibraryColumn::Location,
                    id: "library_location",
                    title: "Location",
                    width: 108,
                    visible: true,
                },
                ColumnSpec {
                    column: LibraryColumn::Modified,
                    id: "library_modified",
                    title: "Last Modified",
                    width: 120,
                    visible: false,
                },
            ],
        }
    }

    /// All column specs in presentation order.
    pub fn specs(&self) -> &[ColumnSpec] {
        &self.specs
    }

    /// The spec for one column.
    pub fn spec(&self, column: LibraryColumn) -> &ColumnSpec {
        self.specs
            .iter()
            .find(|s| s.column == column)
            .expect("every LibraryColumn has a spec")
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the layout is empty (it never is).
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Show or hide a column.
    pub fn set_visible(&mut self, column: LibraryColumn, visible: bool) {
        if let Some(spec) = self.specs.iter_mut().find(|s| s.column == column) {
            spec.visible = visible;
        }
    }

    /// The currently visible columns, in order.
    pub fn visible(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.specs.iter().filter(|s| s.visible)
    }

    /// Column receiving type-ahead keyboard search.
    pub fn type_ahead_column(&self) -> LibraryColumn {
        LibraryColumn::Name
    }

    /// Whether cell content in a column may be clipped with an
    /// ellipsis. Icons are never clipped.
    pub fn is_clippable(&self, column: LibraryColumn) -> bool {
        column != LibraryColumn::Icon
    }
}

impl Default for TableColumns {
    fn default() -> Self {
        Self::new()
    }
}
