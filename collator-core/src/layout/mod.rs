//! Alignment table layout.
//!
//! Each column is normalized, grouped and labeled on its own; the column
//! widths are then paginated left to right, and finally the per-column
//! results are recombined into a [`DisplayMatrix`].
//!
//! The engine keeps no state between calls; an [`AlignmentLayout`] only holds
//! its validated configuration.

mod assembler;
pub mod category;
pub mod grouper;
pub mod segmenter;
mod stats;
pub mod types;

use collator_types::{Category, LayoutConfig, LayoutError};
use log::{debug, trace};

use crate::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
use crate::table::{AlignmentColumn, AlignmentTable};

use assembler::assemble;
pub use category::CategoryAssigner;
pub use grouper::{group_readings, EquivalenceGroup};
pub use segmenter::{column_width, segment};
pub use stats::LayoutStats;
pub use types::{DisplayCell, DisplayMatrix, DisplayRow, DisplaySegment};

/// Normalized readings, groups and categories of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAnalysis {
    normalized: Vec<String>,
    groups: Vec<EquivalenceGroup>,
    categories: Vec<Category>,
}

impl ColumnAnalysis {
    /// Normalized readings in witness ordinal order.
    #[inline(always)]
    pub fn normalized(&self) -> &[String] {
        &self.normalized
    }

    /// Groups in discovery order.
    #[inline(always)]
    pub fn groups(&self) -> &[EquivalenceGroup] {
        &self.groups
    }

    /// Category of every witness, in ordinal order.
    #[inline(always)]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Width of the column used for pagination.
    #[inline]
    pub fn width(&self) -> usize {
        column_width(&self.normalized)
    }

    /// Returns `true` if the witnesses disagree at this column.
    #[inline(always)]
    pub fn is_variant(&self) -> bool {
        self.groups.len() > 1
    }
}

/// Configured layout engine.
///
/// # Examples
///
/// ```
/// use collator_core::{AlignmentLayout, AlignmentTable};
/// use collator_types::LayoutConfig;
///
/// let table = AlignmentTable::new(
///     ["A", "B"],
///     vec![vec![vec!["A black cat".to_owned()], vec!["A striped cat".to_owned()]]],
/// )
/// .unwrap();
///
/// let engine = AlignmentLayout::new(LayoutConfig::default()).unwrap();
/// let matrix = engine.layout(&table).unwrap();
///
/// assert_eq!(matrix.len(), 1);
/// assert_eq!(matrix.segments[0].rows[1].cells[1].class(), Some("blue"));
/// ```
#[derive(Debug, Clone)]
pub struct AlignmentLayout {
    config: LayoutConfig,
    normalizer: TextNormalizer,
}

impl AlignmentLayout {
    /// Creates an engine after validating its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfiguration`] if the configuration
    /// fails [`LayoutConfig::validate`].
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let normalizer = TextNormalizer::new(NormalizerConfig::from(&config));
        Ok(Self { config, normalizer })
    }

    /// Returns the active configuration.
    #[inline(always)]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Returns the reading normalizer.
    #[inline(always)]
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Normalizes, groups and labels one column.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::PaletteExhausted`] if the column has more
    /// groups than the palette has labels.
    pub fn analyze_column(
        &self,
        index: usize,
        column: &AlignmentColumn,
    ) -> Result<ColumnAnalysis, LayoutError> {
        let normalized: Vec<String> = column
            .readings()
            .iter()
            .map(|raw| self.normalizer.normalize(raw))
            .collect();

        let groups = group_readings(&normalized);
        let categories = CategoryAssigner::new(
            &self.config.category_palette,
            self.config.gaps_consume_palette,
        )
        .assign(index, &groups)?;

        trace!("column {}: {} groups", index, groups.len());

        Ok(ColumnAnalysis {
            normalized,
            groups,
            categories,
        })
    }

    /// Lays out a whole table.
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutError`] met; no partial matrix is produced.
    pub fn layout(&self, table: &AlignmentTable) -> Result<DisplayMatrix, LayoutError> {
        self.layout_with_stats(table).map(|(matrix, _)| matrix)
    }

    /// Lays out a whole table and reports statistics about the result.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AlignmentLayout::layout`].
    pub fn layout_with_stats(
        &self,
        table: &AlignmentTable,
    ) -> Result<(DisplayMatrix, LayoutStats), LayoutError> {
        debug!(
            "laying out {} columns x {} witnesses (budget {})",
            table.column_count(),
            table.witness_count(),
            self.config.width_budget
        );

        let analyses = table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| self.analyze_column(i, column))
            .collect::<Result<Vec<_>, _>>()?;

        let widths: Vec<usize> = analyses.iter().map(ColumnAnalysis::width).collect();
        let segments = segment(&widths, self.config.width_budget)?;

        let matrix = assemble(table.witnesses(), &analyses, &segments);
        let stats = LayoutStats::from_analyses(table.witness_count(), &analyses, segments.len());

        debug!("layout done: {}", stats);

        Ok((matrix, stats))
    }
}
