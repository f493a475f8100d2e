//! Field mapping engine for student datasets
//!
//! Maps arbitrarily named spreadsheet columns onto the canonical student
//! record schema in two passes: a name-pattern pass over column headers,
//! then a content-detection pass over the values of whatever the first pass
//! left unmapped.
//!
//! ## Architecture
//!
//! The engine is organized into logical components:
//! - [`field_type`] - Canonical field vocabulary and registry ordering
//! - [`patterns`] - Per-field column name pattern sets
//! - [`detectors`] - Per-field content heuristics and sampling
//! - [`mapping`] - Mapping results and coverage statistics
//!
//! ## Usage
//!
//! ```rust
//! use roster_mapper::{FieldMapper, Table};
//!
//! # fn example(table: Table) -> roster_mapper::Result<()> {
//! let mapper = FieldMapper::new()?;
//! let normalized = mapper.transform_table(&table);
//!
//! println!(
//!     "mapped {} of {} columns",
//!     mapper.map_fields(&table).len(),
//!     table.column_count()
//! );
//! # Ok(())
//! # }
//! ```

pub mod detectors;
pub mod field_type;
pub mod mapping;
pub mod patterns;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_type::FieldType;
pub use mapping::{ColumnMapping, MappingEntry, MappingSource, MappingStats};

use crate::table::{Column, Table};
use crate::Result;
use detectors::ContentDetectors;
use patterns::NamePatternRegistry;
use tracing::{debug, info, warn};

/// Field mapping engine
///
/// Holds the immutable pattern and detector registries, compiled once at
/// construction. The mapper itself is stateless across calls: a fresh
/// [`ColumnMapping`] is built per table, so one mapper can be shared freely
/// across threads as long as each call works on its own table.
#[derive(Debug)]
pub struct FieldMapper {
    patterns: NamePatternRegistry,
    detectors: ContentDetectors,
}

impl FieldMapper {
    /// Build a mapper, compiling every pattern registry
    ///
    /// The only failure mode is a pattern that fails to compile; all mapping
    /// operations afterwards are total.
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: NamePatternRegistry::compile()?,
            detectors: ContentDetectors::compile()?,
        })
    }

    /// Match a column name against the per-field pattern sets
    ///
    /// The name is trimmed and lowercased, then tried against each field's
    /// patterns in registry order; the first field with a full-name match
    /// wins. Deterministic: a fixed name always resolves the same way.
    pub fn match_column_name(&self, column_name: &str) -> Option<FieldType> {
        self.patterns.match_column_name(column_name)
    }

    /// Infer a field type from a column's cell values
    ///
    /// Missing cells are ignored. Returns `None` for empty or all-missing
    /// columns, or when no detector fires.
    pub fn analyze_column_content(&self, values: &[Option<String>]) -> Option<FieldType> {
        let present: Vec<&str> = values.iter().filter_map(|cell| cell.as_deref()).collect();
        self.detectors.detect(&present)
    }

    /// Build the column mapping for a table
    ///
    /// Pass one records every column whose name matches a field pattern;
    /// two headers may legitimately claim the same canonical field (e.g.
    /// "Name" and "Student Name") and both entries are kept. Pass two runs
    /// content detection over the remaining columns, skipping any field whose
    /// canonical name is already claimed so detection never piles onto an
    /// established target.
    pub fn map_fields(&self, table: &Table) -> ColumnMapping {
        let mut mapping = ColumnMapping::new();

        for (index, column) in table.columns().iter().enumerate() {
            if let Some(field) = self.match_column_name(column.name()) {
                mapping.push(MappingEntry {
                    index,
                    original: column.name().to_string(),
                    field,
                    canonical: field.output_name(),
                    source: MappingSource::Name,
                });
            }
        }

        for (index, column) in table.columns().iter().enumerate() {
            if mapping.contains_index(index) {
                continue;
            }
            let Some(field) = self.analyze_column_content(column.values()) else {
                continue;
            };
            if mapping.target_claimed(field.output_name()) {
                debug!(
                    column = column.name(),
                    field = field.label(),
                    "content detection skipped: canonical field already claimed"
                );
                continue;
            }
            mapping.push(MappingEntry {
                index,
                original: column.name().to_string(),
                field,
                canonical: field.output_name(),
                source: MappingSource::Content,
            });
        }

        info!(
            "Mapped {} out of {} columns",
            mapping.len(),
            table.column_count()
        );
        for entry in mapping.entries() {
            info!("  {} -> {}", entry.original, entry.canonical);
        }

        mapping
    }

    /// Rewrite a table onto the canonical schema
    ///
    /// Mapped columns come first, in mapping order, under their canonical
    /// names; unmapped columns follow unchanged under their original names,
    /// in original table order. Row count, row order and every cell value are
    /// preserved exactly. A table where nothing maps is returned unchanged.
    pub fn transform_table(&self, table: &Table) -> Table {
        let mapping = self.map_fields(table);

        if mapping.is_empty() {
            warn!("No fields could be mapped; returning table unchanged");
            return table.clone();
        }

        let mut columns = Vec::with_capacity(table.column_count());

        for entry in mapping.entries() {
            let original = &table.columns()[entry.index];
            columns.push(Column::new(entry.canonical, original.values().to_vec()));
        }

        for (index, column) in table.columns().iter().enumerate() {
            if !mapping.contains_index(index) {
                columns.push(column.clone());
            }
        }

        Table::from_parts(columns)
    }
}
