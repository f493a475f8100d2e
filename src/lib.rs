//! Roster Mapper Library
//!
//! A Rust library for normalizing heterogeneous student datasets onto a
//! canonical record schema.
//!
//! This library provides tools for:
//! - Matching arbitrary spreadsheet column names against per-field pattern sets
//! - Inferring a column's semantic field from its cell values when the name
//!   gives nothing away
//! - Rewriting tables into the canonical schema while passing unrecognized
//!   columns through untouched
//! - Reporting mapping coverage for downstream cleaning and review steps
//!
//! File loading (CSV/Excel), duplicate detection and report generation are
//! handled by external collaborators; this crate operates purely on in-memory
//! tables.

pub mod constants;
pub mod mapper;
pub mod table;

// Re-export commonly used types
pub use mapper::{ColumnMapping, FieldMapper, FieldType, MappingEntry, MappingSource, MappingStats};
pub use table::{Column, Table};

/// Result type alias for roster mapping operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for roster mapping operations
///
/// Malformed data is never an error: unparseable dates, non-numeric "numeric"
/// columns and the like are negative detector signals. Only structural
/// problems surface here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A field pattern failed to compile at registry construction
    #[error("invalid pattern '{pattern}' for field '{field}'")]
    PatternCompilation {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A column's value count disagrees with the table's row count
    #[error("column '{column}' has {found} rows but the table has {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

impl Error {
    /// Create a pattern compilation error with context
    pub fn pattern_compilation(
        field: impl Into<String>,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::PatternCompilation {
            field: field.into(),
            pattern: pattern.into(),
            source,
        }
    }

    /// Create a column length mismatch error
    pub fn column_length(column: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ColumnLength {
            column: column.into(),
            expected,
            found,
        }
    }
}
