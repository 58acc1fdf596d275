//! Recombination of per-column results into the display matrix.

use collator_types::{Segment, Witness};

use crate::layout::types::{DisplayCell, DisplayMatrix, DisplayRow, DisplaySegment};
use crate::layout::ColumnAnalysis;

/// Builds the display matrix from finished column analyses and segments.
///
/// Nothing is normalized or regrouped here. A witness whose normalized
/// reading is empty gets an [`DisplayCell::Empty`] cell whatever category it
/// was assigned.
///
/// `segments` must lie within `columns`, and every witness ordinal must have
/// a reading in each analysis. [`AlignmentLayout::layout`] builds all three
/// from one table.
///
/// [`AlignmentLayout::layout`]: crate::layout::AlignmentLayout::layout
pub(crate) fn assemble(
    witnesses: &[Witness],
    columns: &[ColumnAnalysis],
    segments: &[Segment],
) -> DisplayMatrix {
    let segments = segments
        .iter()
        .map(|&range| DisplaySegment {
            columns: range,
            rows: witnesses
                .iter()
                .map(|witness| assemble_row(witness, &columns[range.range()]))
                .collect(),
        })
        .collect();

    DisplayMatrix { segments }
}

fn assemble_row(witness: &Witness, columns: &[ColumnAnalysis]) -> DisplayRow {
    let mut cells = Vec::with_capacity(columns.len() + 1);
    cells.push(DisplayCell::Label {
        text: witness.id.clone(),
    });

    for column in columns {
        let text = &column.normalized()[witness.ordinal];
        if text.is_empty() {
            cells.push(DisplayCell::Empty);
        } else {
            cells.push(DisplayCell::Content {
                text: text.clone(),
                category: column.categories()[witness.ordinal].clone(),
            });
        }
    }

    DisplayRow {
        witness: witness.ordinal,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::AlignmentLayout;
    use crate::table::AlignmentColumn;
    use collator_types::{Category, LayoutConfig};

    fn analyses(columns: &[&[&str]]) -> Vec<ColumnAnalysis> {
        let engine = AlignmentLayout::new(LayoutConfig::default()).unwrap();
        columns
            .iter()
            .enumerate()
            .map(|(i, readings)| {
                let column = AlignmentColumn::new(readings.iter().map(|s| (*s).to_owned()).collect());
                engine.analyze_column(i, &column).unwrap()
            })
            .collect()
    }

    fn witnesses(ids: &[&str]) -> Vec<Witness> {
        ids.iter().enumerate().map(|(o, id)| Witness::new(o, *id)).collect()
    }

    #[test]
    fn rows_start_with_label_and_have_equal_length() {
        let columns = analyses(&[&["a", "b"], &["c", "c"], &["d", ""]]);
        let matrix = assemble(
            &witnesses(&["A", "B"]),
            &columns,
            &[Segment::new(0, 2), Segment::new(2, 3)],
        );

        assert_eq!(matrix.len(), 2);
        for segment in &matrix.segments {
            assert_eq!(segment.rows.len(), 2);
            for row in &segment.rows {
                assert_eq!(row.cells.len(), segment.columns.len() + 1);
            }
        }
        assert_eq!(matrix.segments[0].rows[1].label(), "B");
    }

    #[test]
    fn cells_carry_categories() {
        let columns = analyses(&[&["a", "b"], &["c", "c"]]);
        let matrix = assemble(&witnesses(&["A", "B"]), &columns, &[Segment::new(0, 2)]);
        let row = &matrix.segments[0].rows[0];

        assert_eq!(
            row.column_cells(),
            &[
                DisplayCell::Content {
                    text: "a".into(),
                    category: Category::Label("green".into()),
                },
                DisplayCell::Content {
                    text: "c".into(),
                    category: Category::Uniform,
                },
            ]
        );
    }

    #[test]
    fn empty_reading_overrides_assigned_color() {
        let columns = analyses(&[&["", "cat", ""]]);
        assert_eq!(columns[0].categories()[0], Category::Label("green".into()));

        let matrix = assemble(&witnesses(&["A", "B", "C"]), &columns, &[Segment::new(0, 1)]);
        let rows = &matrix.segments[0].rows;
        assert_eq!(rows[0].column_cells(), &[DisplayCell::Empty]);
        assert_eq!(rows[2].column_cells(), &[DisplayCell::Empty]);
        assert_eq!(rows[1].column_cells()[0].class(), Some("blue"));
    }

    #[test]
    fn no_segments_no_output() {
        let matrix = assemble(&witnesses(&["A"]), &[], &[]);
        assert!(matrix.is_empty());
    }
}
