//! Display-ready output of the layout engine.

use collator_types::{Category, Ordinal, Segment, EMPTY_CLASS};
use serde::Serialize;

/// One renderable cell of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayCell {
    /// Witness label opening every row.
    Label {
        /// Witness id.
        text: String,
    },
    /// The witness has no text at this column.
    Empty,
    /// Normalized reading tagged with the column's category.
    Content {
        /// Normalized reading.
        text: String,
        /// Category of the witness's group.
        category: Category,
    },
}

impl DisplayCell {
    /// Class name for renderers; labels carry none.
    pub fn class(&self) -> Option<&str> {
        match self {
            DisplayCell::Label { .. } => None,
            DisplayCell::Empty => Some(EMPTY_CLASS),
            DisplayCell::Content { category, .. } => Some(category.as_str()),
        }
    }

    /// Cell text; empty for gap cells.
    pub fn text(&self) -> &str {
        match self {
            DisplayCell::Label { text } | DisplayCell::Content { text, .. } => text,
            DisplayCell::Empty => "",
        }
    }
}

/// One witness's cells for one segment, label first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// Ordinal of the witness this row belongs to.
    pub witness: Ordinal,
    /// Label cell followed by one cell per column of the segment.
    pub cells: Vec<DisplayCell>,
}

impl DisplayRow {
    /// Witness label of the row.
    pub fn label(&self) -> &str {
        self.cells.first().map_or("", DisplayCell::text)
    }

    /// Cells after the label.
    pub fn column_cells(&self) -> &[DisplayCell] {
        self.cells.get(1..).unwrap_or(&[])
    }
}

/// One block of columns with a row per witness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySegment {
    /// Columns covered by this block.
    pub columns: Segment,
    /// Rows in witness ordinal order.
    pub rows: Vec<DisplayRow>,
}

/// Complete layout of an alignment table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayMatrix {
    /// Segments in column order.
    pub segments: Vec<DisplaySegment>,
}

impl DisplayMatrix {
    /// Number of segments.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the matrix has no segments.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Pretty-printed JSON form for external renderers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
