//! Alignment table ingestion.
//!
//! The collation engine emits a JSON document of the form
//!
//! ```text
//! {
//!   "witnesses": ["A", "B"],
//!   "table": [
//!     [["A ", "black "], ["A ", "black "]],
//!     [["cat"], []]
//!   ]
//! }
//! ```
//!
//! Witnesses may also be objects carrying an `id`, and reading fragments may
//! be CollateX token objects carrying their text in `t`. A `null` slot is a
//! gap. Fragments of one slot are concatenated into a single raw reading.

use collator_types::{LayoutError, Ordinal, Witness};
use serde::Deserialize;

/// One alignment position: a raw reading per witness ordinal.
///
/// An empty string is a gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentColumn {
    readings: Vec<String>,
}

impl AlignmentColumn {
    /// Creates a column from one reading per witness.
    pub fn new(readings: Vec<String>) -> Self {
        Self { readings }
    }

    /// Raw readings in witness ordinal order.
    #[inline(always)]
    pub fn readings(&self) -> &[String] {
        &self.readings
    }

    /// Raw reading of one witness.
    #[inline(always)]
    pub fn reading(&self, ordinal: Ordinal) -> Option<&str> {
        self.readings.get(ordinal).map(String::as_str)
    }

    /// Number of witness slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns `true` if the column has no witness slots.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Immutable alignment table: witnesses plus their aligned columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    witnesses: Vec<Witness>,
    columns: Vec<AlignmentColumn>,
}

impl AlignmentTable {
    /// Builds a table from witness labels and per-column reading fragments.
    ///
    /// Witness ordinals follow the order of `witness_ids`; fragments of each
    /// slot are concatenated.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MalformedAlignment`] if a column does not hold
    /// exactly one slot per witness, or if the table has columns but no
    /// witnesses.
    pub fn new<I, S>(witness_ids: I, columns: Vec<Vec<Vec<String>>>) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let witnesses: Vec<Witness> = witness_ids
            .into_iter()
            .enumerate()
            .map(|(ordinal, id)| Witness::new(ordinal, id))
            .collect();

        let columns = columns
            .into_iter()
            .map(|slots| AlignmentColumn::new(slots.into_iter().map(|f| f.concat()).collect()))
            .collect();

        Self::from_parts(witnesses, columns)
    }

    /// Builds a table from already concatenated columns.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AlignmentTable::new`].
    pub fn from_columns<I, S>(
        witness_ids: I,
        columns: Vec<AlignmentColumn>,
    ) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let witnesses = witness_ids
            .into_iter()
            .enumerate()
            .map(|(ordinal, id)| Witness::new(ordinal, id))
            .collect();
        Self::from_parts(witnesses, columns)
    }

    /// Decodes the collation engine's JSON output.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MalformedAlignment`] if the document cannot be
    /// decoded or fails the checks of [`AlignmentTable::new`].
    pub fn from_json(input: &str) -> Result<Self, LayoutError> {
        let raw: RawTable = serde_json::from_str(input)
            .map_err(|e| LayoutError::malformed(format!("cannot decode alignment JSON: {e}")))?;

        let witness_ids: Vec<String> = raw.witnesses.into_iter().map(RawWitness::into_id).collect();
        let columns = raw
            .table
            .into_iter()
            .map(|slots| {
                let readings = slots
                    .into_iter()
                    .map(|slot| {
                        slot.unwrap_or_default()
                            .iter()
                            .map(RawToken::text)
                            .collect::<String>()
                    })
                    .collect();
                AlignmentColumn::new(readings)
            })
            .collect();

        Self::from_columns(witness_ids, columns)
    }

    fn from_parts(
        witnesses: Vec<Witness>,
        columns: Vec<AlignmentColumn>,
    ) -> Result<Self, LayoutError> {
        if witnesses.is_empty() && !columns.is_empty() {
            return Err(LayoutError::malformed("table has columns but no witnesses"));
        }

        for (index, column) in columns.iter().enumerate() {
            if column.len() > witnesses.len() {
                return Err(LayoutError::malformed_at(
                    index,
                    format!(
                        "slot {} has no witness entry ({} witnesses)",
                        witnesses.len(),
                        witnesses.len()
                    ),
                ));
            }
            if column.len() != witnesses.len() {
                return Err(LayoutError::malformed_at(
                    index,
                    format!(
                        "expected {} readings, found {}",
                        witnesses.len(),
                        column.len()
                    ),
                ));
            }
        }

        Ok(Self { witnesses, columns })
    }

    /// Witnesses in ordinal order.
    #[inline(always)]
    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    /// Columns in alignment order.
    #[inline(always)]
    pub fn columns(&self) -> &[AlignmentColumn] {
        &self.columns
    }

    /// Number of witnesses.
    #[inline(always)]
    #[must_use]
    pub fn witness_count(&self) -> usize {
        self.witnesses.len()
    }

    /// Number of alignment columns.
    #[inline(always)]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[derive(Deserialize)]
struct RawTable {
    witnesses: Vec<RawWitness>,
    table: Vec<Vec<Option<Vec<RawToken>>>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWitness {
    Id(String),
    Object { id: String },
}

impl RawWitness {
    fn into_id(self) -> String {
        match self {
            RawWitness::Id(id) | RawWitness::Object { id } => id,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Text(String),
    Object { t: String },
}

impl RawToken {
    fn text(&self) -> &str {
        match self {
            RawToken::Text(t) | RawToken::Object { t } => t,
        }
    }
}
