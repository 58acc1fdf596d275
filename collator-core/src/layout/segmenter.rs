//! Width-based pagination of the column sequence.

use collator_types::{LayoutError, Segment};

/// Display width of one column: the longest normalized reading, in characters.
///
/// A column of gaps has width 0.
pub fn column_width<S: AsRef<str>>(readings: &[S]) -> usize {
    readings
        .iter()
        .map(|r| r.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// Cuts the columns into segments of roughly `width_budget` characters.
///
/// Widths are summed left to right; once the running sum strictly exceeds the
/// budget the current segment is closed after that column and the sum starts
/// again from zero. Whatever remains after the last column forms the final
/// segment. The segments are contiguous and cover `0..widths.len()`; no
/// columns means no segments.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidConfiguration`] if `width_budget` is zero.
pub fn segment(widths: &[usize], width_budget: usize) -> Result<Vec<Segment>, LayoutError> {
    if width_budget == 0 {
        return Err(LayoutError::invalid_config("width budget must be positive"));
    }

    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut width_sum = 0usize;

    for (i, &width) in widths.iter().enumerate() {
        width_sum = width_sum.saturating_add(width);
        if width_sum > width_budget {
            segments.push(Segment::new(start, i + 1));
            start = i + 1;
            width_sum = 0;
        }
    }

    if start < widths.len() {
        segments.push(Segment::new(start, widths.len()));
    }

    Ok(segments)
}
