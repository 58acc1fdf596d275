//! Palette assignment for reading groups.

use collator_types::{Category, LayoutError};

use crate::layout::grouper::EquivalenceGroup;

/// Hands out palette labels to the groups of one column.
#[derive(Debug, Clone, Copy)]
pub struct CategoryAssigner<'p> {
    palette: &'p [String],
    gaps_consume_palette: bool,
}

impl<'p> CategoryAssigner<'p> {
    /// Creates an assigner over a validated palette.
    pub fn new(palette: &'p [String], gaps_consume_palette: bool) -> Self {
        Self {
            palette,
            gaps_consume_palette,
        }
    }

    /// Maps every witness of the column to its category.
    ///
    /// The result is indexed by witness ordinal. With one counted group the
    /// whole column is [`Category::Uniform`]; otherwise the i-th counted group
    /// gets the i-th palette label. A gap group is only counted when
    /// `gaps_consume_palette` is set; an uncounted gap group is uniform.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::PaletteExhausted`] if there are more counted
    /// groups than palette labels.
    pub fn assign(
        &self,
        column: usize,
        groups: &[EquivalenceGroup],
    ) -> Result<Vec<Category>, LayoutError> {
        let witnesses: usize = groups.iter().map(EquivalenceGroup::len).sum();
        let mut categories = vec![Category::Uniform; witnesses];

        let counts = |g: &&EquivalenceGroup| self.gaps_consume_palette || !g.is_gap();
        let counted = groups.iter().filter(counts).count();

        if counted <= 1 {
            return Ok(categories);
        }

        if counted > self.palette.len() {
            return Err(LayoutError::PaletteExhausted {
                column,
                groups: counted,
                palette_len: self.palette.len(),
            });
        }

        for (group, label) in groups.iter().filter(counts).zip(self.palette) {
            for &ordinal in group.members() {
                categories[ordinal] = Category::Label(label.clone());
            }
        }

        Ok(categories)
    }
}
