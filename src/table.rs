//! In-memory tabular data model
//!
//! A [`Table`] is an ordered sequence of named columns with rows aligned by
//! position. Cells are `Option<String>`: `None` is the missing marker and is
//! distinct from an empty string. Duplicate column names are representable on
//! purpose — the mapper may emit two columns with the same canonical name and
//! that output shape must survive round-trips.

use crate::{Error, Result};

/// A single named column of raw cell values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    values: Vec<Option<String>>,
}

impl Column {
    /// Create a column from a name and its cell values
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name as supplied by the source file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All cell values, missing markers included
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Number of cells (equals the table's row count)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the column holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Non-missing cell values, in row order
    pub fn present_values(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter_map(|cell| cell.as_deref())
            .collect()
    }

    /// Number of missing cells
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|cell| cell.is_none()).count()
    }
}

/// Ordered collection of columns with positionally aligned rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pre-assembled columns, validating row alignment
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Internal constructor for columns already known to be row-aligned
    pub(crate) fn from_parts(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Append a column, rejecting any row-count mismatch
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if let Some(first) = self.columns.first() {
            if column.len() != first.len() {
                return Err(Error::column_length(
                    column.name(),
                    first.len(),
                    column.len(),
                ));
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// All columns in table order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (zero for a table with no columns)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// First column with the given name, if any
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Column names in table order (duplicates preserved)
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }
}
