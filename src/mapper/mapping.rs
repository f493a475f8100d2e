//! Column mapping result and summary statistics
//!
//! A [`ColumnMapping`] is built fresh for each table, used once to drive the
//! transformation, and discarded. Entries keep their insertion order:
//! name-pass matches first, content-pass matches after, each in original
//! column order — the output table emits mapped columns in exactly this
//! order.

use crate::mapper::FieldType;
use serde::{Deserialize, Serialize};

/// How a column was mapped onto its canonical field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MappingSource {
    /// The column name matched a field's pattern set
    Name,
    /// A content detector fired on the column's values
    Content,
}

/// A single original-column-to-canonical-field association
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    /// Position of the column in the source table
    pub index: usize,

    /// Original column name as supplied by the source file
    pub original: String,

    /// Field the column was recognized as
    pub field: FieldType,

    /// Canonical output column name
    pub canonical: &'static str,

    /// Which pass produced this entry
    pub source: MappingSource,
}

/// Per-table mapping from original columns to canonical fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    entries: Vec<MappingEntry>,
}

impl ColumnMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new association
    pub(crate) fn push(&mut self, entry: MappingEntry) {
        self.entries.push(entry);
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Number of mapped columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no column could be mapped
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the column at `index` is already mapped
    pub fn contains_index(&self, index: usize) -> bool {
        self.entries.iter().any(|entry| entry.index == index)
    }

    /// True when some entry already targets the given canonical name
    pub fn target_claimed(&self, canonical: &str) -> bool {
        self.entries.iter().any(|entry| entry.canonical == canonical)
    }

    /// Canonical name for an original column name, if mapped
    ///
    /// With duplicate original names (out-of-contract input) the first entry
    /// wins, mirroring column lookup on [`crate::Table`].
    pub fn canonical_for(&self, original: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.original == original)
            .map(|entry| entry.canonical)
    }

    /// Summarize mapping coverage for a table with `total_columns` columns
    pub fn stats(&self, total_columns: usize) -> MappingStats {
        let mapped_by_name = self
            .entries
            .iter()
            .filter(|e| e.source == MappingSource::Name)
            .count();
        let mapped_by_content = self.entries.len() - mapped_by_name;

        MappingStats {
            total_columns,
            mapped_by_name,
            mapped_by_content,
            unmapped: total_columns.saturating_sub(self.entries.len()),
        }
    }
}

/// Mapping coverage summary
///
/// Purely observational: collaborators surface these numbers in logs and
/// review UIs, they never affect the transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingStats {
    /// Columns in the source table
    pub total_columns: usize,

    /// Columns mapped by the name-pattern pass
    pub mapped_by_name: usize,

    /// Columns mapped by the content-detection pass
    pub mapped_by_content: usize,

    /// Columns left untouched
    pub unmapped: usize,
}

impl MappingStats {
    /// Fraction of columns that were mapped, in [0, 1]
    pub fn mapped_fraction(&self) -> f64 {
        if self.total_columns == 0 {
            0.0
        } else {
            (self.mapped_by_name + self.mapped_by_content) as f64 / self.total_columns as f64
        }
    }
}
