//! Core types and configuration for the Collator layout engine.
//!
//! This crate holds everything shared between the layout core and its
//! callers. Keeping it separate means:
//!
//! - **Stable output types**: renderers depend on the display types only
//! - **One configuration surface**: the caller builds a [`LayoutConfig`] once
//! - **One error type**: every fallible operation returns [`LayoutError`]

#![warn(missing_docs)]

use core::fmt;
use core::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position of a witness in the alignment input.
///
/// Ordinals are assigned in order of first appearance and are the tie-break
/// for every ordering decision in the engine.
pub type Ordinal = usize;

/// Class emitted for every witness of a column in which all witnesses agree.
pub const UNIFORM_CLASS: &str = "none";

/// Class emitted for cells whose normalized reading is empty.
pub const EMPTY_CLASS: &str = "empty";

/// Palette used when the caller does not supply one.
pub const DEFAULT_PALETTE: [&str; 5] = ["green", "blue", "red", "yellow", "pink"];

/// Width budget of the standard deployment.
pub const DEFAULT_WIDTH_BUDGET: usize = 100;

/// Width budget of the compact deployment.
pub const COMPACT_WIDTH_BUDGET: usize = 80;

/// One source text taking part in the collation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Witness {
    /// Position in the alignment input.
    pub ordinal: Ordinal,
    /// Label shown at the start of every row.
    pub id: String,
}

impl Witness {
    /// Creates a witness.
    pub fn new(ordinal: Ordinal, id: impl Into<String>) -> Self {
        Self {
            ordinal,
            id: id.into(),
        }
    }
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Half-open range of alignment columns displayed as one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    /// First column of the segment.
    pub start: usize,
    /// One past the last column of the segment.
    pub end: usize,
}

impl Segment {
    /// Creates a segment covering `start..end`.
    #[inline(always)]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "segment start must not exceed its end");
        Self { start, end }
    }

    /// Number of columns in the segment.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the segment covers no columns.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Column indices covered by the segment.
    #[inline(always)]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Display category assigned to a witness at one column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Category {
    /// Every witness of the column agrees.
    Uniform,
    /// The witness belongs to one of several groups; carries its palette label.
    Label(String),
}

impl Category {
    /// Class name used by renderers.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Uniform => UNIFORM_CLASS,
            Category::Label(label) => label,
        }
    }

    /// Returns `true` for the agreement sentinel.
    #[inline(always)]
    pub fn is_uniform(&self) -> bool {
        matches!(self, Category::Uniform)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Uniform => UNIFORM_CLASS.to_owned(),
            Category::Label(label) => label,
        }
    }
}

/// Errors raised while laying out an alignment table.
///
/// Every error is fatal to the table being processed; no partial output is
/// produced once one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A column produced more reading groups than the palette has labels.
    #[error("column {column} has {groups} reading groups but the palette only has {palette_len} labels")]
    PaletteExhausted {
        /// Column that overflowed the palette.
        column: usize,
        /// Number of groups needing a label.
        groups: usize,
        /// Number of labels available.
        palette_len: usize,
    },
    /// The alignment input is structurally inconsistent.
    #[error("malformed alignment{}: {reason}", fmt_column(.column))]
    MalformedAlignment {
        /// Offending column, when the problem is local to one.
        column: Option<usize>,
        /// What is wrong with the input.
        reason: String,
    },
    /// The layout configuration cannot be used.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What is wrong with the configuration.
        reason: String,
    },
}

fn fmt_column(column: &Option<usize>) -> String {
    match column {
        Some(c) => format!(" at column {c}"),
        None => String::new(),
    }
}

impl LayoutError {
    /// Shorthand for a [`LayoutError::MalformedAlignment`] tied to a column.
    pub fn malformed_at(column: usize, reason: impl Into<String>) -> Self {
        LayoutError::MalformedAlignment {
            column: Some(column),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`LayoutError::MalformedAlignment`] about the whole table.
    pub fn malformed(reason: impl Into<String>) -> Self {
        LayoutError::MalformedAlignment {
            column: None,
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`LayoutError::InvalidConfiguration`].
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        LayoutError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Layout configuration options.
///
/// Missing fields take their default when deserialized, so a configuration
/// document only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Strip accents and breathings after canonical decomposition.
    /// Default: false
    pub strip_diacritics: bool,
    /// Remove sentence punctuation before comparison.
    /// Default: true
    pub strip_punctuation: bool,
    /// Accumulated column width after which a segment is closed.
    /// Default: 100
    pub width_budget: usize,
    /// Ordered labels handed out to reading groups.
    pub category_palette: Vec<String>,
    /// Whether a group of empty readings takes a palette slot.
    /// Default: true
    pub gaps_consume_palette: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strip_diacritics: false,
            strip_punctuation: true,
            width_budget: DEFAULT_WIDTH_BUDGET,
            category_palette: DEFAULT_PALETTE.iter().map(|s| (*s).to_owned()).collect(),
            gaps_consume_palette: true,
        }
    }
}

impl LayoutConfig {
    /// Creates the configuration used for narrow output.
    pub fn compact() -> Self {
        Self {
            width_budget: COMPACT_WIDTH_BUDGET,
            ..Self::default()
        }
    }

    /// Replaces the palette.
    pub fn with_palette<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_palette = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the width budget.
    pub fn with_width_budget(mut self, width_budget: usize) -> Self {
        self.width_budget = width_budget;
        self
    }

    /// Checks the configuration before any table is processed.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfiguration`] if the width budget is
    /// zero, or a palette label is empty, duplicated, or reserved.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width_budget == 0 {
            return Err(LayoutError::invalid_config("width budget must be positive"));
        }

        for (i, label) in self.category_palette.iter().enumerate() {
            if label.is_empty() {
                return Err(LayoutError::invalid_config(format!(
                    "palette label {i} is empty"
                )));
            }
            if label == UNIFORM_CLASS || label == EMPTY_CLASS {
                return Err(LayoutError::invalid_config(format!(
                    "palette label '{label}' is reserved"
                )));
            }
            if self.category_palette[..i].contains(label) {
                return Err(LayoutError::invalid_config(format!(
                    "palette label '{label}' appears more than once"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_basics() {
        let s = Segment::new(3, 7);
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert_eq!(s.range(), 3..7);
        assert_eq!(s.to_string(), "[3, 7)");
        assert!(Segment::new(2, 2).is_empty());
    }

    #[test]
    fn category_class_names() {
        assert_eq!(Category::Uniform.as_str(), "none");
        assert_eq!(Category::Label("blue".into()).as_str(), "blue");
        assert!(Category::Uniform.is_uniform());
        assert!(!Category::Label("red".into()).is_uniform());
    }

    #[test]
    fn category_serializes_as_class_name() {
        let json = serde_json::to_string(&vec![
            Category::Uniform,
            Category::Label("green".into()),
        ])
        .unwrap();
        assert_eq!(json, r#"["none","green"]"#);
    }

    #[test]
    fn default_config_is_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width_budget, 100);
        assert!(config.strip_punctuation);
        assert!(!config.strip_diacritics);
        assert_eq!(config.category_palette.len(), 5);
    }

    #[test]
    fn compact_preset() {
        assert_eq!(LayoutConfig::compact().width_budget, 80);
    }

    #[test]
    fn zero_width_budget_rejected() {
        let config = LayoutConfig::default().with_width_budget(0);
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn duplicate_palette_label_rejected() {
        let config = LayoutConfig::default().with_palette(["green", "blue", "green"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn reserved_palette_label_rejected() {
        for reserved in ["none", "empty"] {
            let config = LayoutConfig::default().with_palette(["green", reserved]);
            assert!(config.validate().is_err(), "{reserved} should be rejected");
        }
    }

    #[test]
    fn empty_palette_label_rejected() {
        let config = LayoutConfig::default().with_palette(["green", ""]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_palette_is_allowed() {
        let config = LayoutConfig::default().with_palette(Vec::<String>::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_config_document_uses_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"width_budget": 80, "strip_diacritics": true}"#).unwrap();
        assert_eq!(config.width_budget, 80);
        assert!(config.strip_diacritics);
        assert!(config.strip_punctuation);
        assert_eq!(config.category_palette, LayoutConfig::default().category_palette);
    }

    #[test]
    fn error_messages() {
        let err = LayoutError::PaletteExhausted {
            column: 4,
            groups: 3,
            palette_len: 2,
        };
        assert_eq!(
            err.to_string(),
            "column 4 has 3 reading groups but the palette only has 2 labels"
        );

        let err = LayoutError::malformed_at(2, "expected 4 readings, found 3");
        assert_eq!(
            err.to_string(),
            "malformed alignment at column 2: expected 4 readings, found 3"
        );

        let err = LayoutError::malformed("no witnesses");
        assert_eq!(err.to_string(), "malformed alignment: no witnesses");
    }
}
