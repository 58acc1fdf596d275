//! Statistics and LayoutStats.

use crate::layout::ColumnAnalysis;

/// A snapshot of layout statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutStats {
    /// Number of witnesses.
    pub num_witnesses: usize,
    /// Number of alignment columns.
    pub num_columns: usize,
    /// Number of display segments.
    pub num_segments: usize,
    /// Columns where the witnesses do not all agree.
    pub variant_columns: usize,
    /// Largest number of groups found in one column.
    pub max_groups: usize,
}

impl LayoutStats {
    /// Constructs stats from finished column analyses.
    pub fn from_analyses(
        num_witnesses: usize,
        analyses: &[ColumnAnalysis],
        num_segments: usize,
    ) -> Self {
        Self {
            num_witnesses,
            num_columns: analyses.len(),
            num_segments,
            variant_columns: analyses.iter().filter(|a| a.is_variant()).count(),
            max_groups: analyses.iter().map(|a| a.groups().len()).max().unwrap_or(0),
        }
    }

    /// Share of columns carrying variants, between 0.0 and 1.0.
    pub fn variant_ratio(&self) -> f32 {
        if self.num_columns == 0 {
            0.0
        } else {
            self.variant_columns as f32 / self.num_columns as f32
        }
    }
}

impl core::fmt::Display for LayoutStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} witnesses, {} columns, {} segments",
            self.num_witnesses, self.num_columns, self.num_segments
        )?;

        if self.num_columns > 0 {
            write!(
                f,
                ", {} variant columns ({:.1}%, max {} groups)",
                self.variant_columns,
                self.variant_ratio() * 100.0,
                self.max_groups
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = LayoutStats::from_analyses(3, &[], 0);
        assert_eq!(stats.max_groups, 0);
        assert_eq!(stats.variant_ratio(), 0.0);
        assert_eq!(stats.to_string(), "3 witnesses, 0 columns, 0 segments");
    }

    #[test]
    fn display_includes_variants() {
        let stats = LayoutStats {
            num_witnesses: 4,
            num_columns: 8,
            num_segments: 2,
            variant_columns: 2,
            max_groups: 3,
        };
        assert_eq!(
            stats.to_string(),
            "4 witnesses, 8 columns, 2 segments, 2 variant columns (25.0%, max 3 groups)"
        );
    }
}
