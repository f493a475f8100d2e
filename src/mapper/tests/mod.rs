//! Tests for the field mapping engine

pub mod mapper_tests;

use crate::table::{Column, Table};
use crate::FieldMapper;

/// Build a mapper for tests, failing loudly if patterns do not compile
pub fn mapper() -> FieldMapper {
    FieldMapper::new().expect("pattern registries should compile")
}

/// Build a column of present cells
pub fn column(name: &str, values: &[&str]) -> Column {
    Column::new(
        name,
        values.iter().map(|v| Some(v.to_string())).collect(),
    )
}

/// Build a column where empty strings stand for missing cells
pub fn column_with_missing(name: &str, values: &[Option<&str>]) -> Column {
    Column::new(
        name,
        values.iter().map(|v| v.map(str::to_string)).collect(),
    )
}

/// Assemble a table from columns, panicking on misaligned rows
pub fn table(columns: Vec<Column>) -> Table {
    Table::from_columns(columns).expect("test columns should be row-aligned")
}
