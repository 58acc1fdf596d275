//! Layout engine for multi-witness alignment tables.
//!
//! Takes the per-column, per-witness alignment computed by a collation
//! engine and turns it into display segments:
//!
//! - **Analyzer**: normalizes raw readings before comparison
//! - **Table**: the immutable alignment input, decoded from collation JSON
//! - **Layout**: grouping, palette assignment, pagination and assembly
//! - **Render**: HTML serialization of the finished layout

pub mod analyzer;
pub mod layout;
pub mod render;
pub mod table;

pub use analyzer::{NormalizerConfig, TextNormalizer};
pub use layout::{
    AlignmentLayout, ColumnAnalysis, DisplayCell, DisplayMatrix, DisplayRow, DisplaySegment,
    LayoutStats,
};
pub use render::render_html;
pub use table::{AlignmentColumn, AlignmentTable};
