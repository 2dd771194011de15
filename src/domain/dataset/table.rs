//! Dataset - the rectangular table handed over by ingestion.

use serde::Serialize;

use super::{CellValue, Metric};
use crate::domain::foundation::ValidationError;

/// A rectangular table of named columns.
///
/// Row order is significant: it defines the alternative identifiers.
/// Every row holds exactly one cell per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Creates a dataset, checking that column names are non-empty and
    /// unique and that every row matches the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, ValidationError> {
        for (i, name) in columns.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("columns[{}]", i)));
            }
            if columns[..i].contains(name) {
                return Err(ValidationError::invalid_format(
                    "columns",
                    format!("duplicate column '{}'", name),
                ));
            }
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns.len()) {
            return Err(ValidationError::invalid_format(
                "rows",
                format!(
                    "row {} has {} cells, expected {}",
                    i + 1,
                    row.len(),
                    columns.len()
                ),
            ));
        }

        Ok(Self { columns, rows })
    }

    /// Creates an empty dataset with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a dataset.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Returns the position of a column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns the cell at a row and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Builder for constructing Dataset instances.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl DatasetBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the columns.
    pub fn columns(mut self, names: Vec<impl Into<String>>) -> Self {
        self.columns = names.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the columns to the nine required metrics in canonical order.
    pub fn metric_columns(self) -> Self {
        self.columns(Metric::ALL.iter().map(|m| m.column_name()).collect::<Vec<_>>())
    }

    /// Appends a row.
    pub fn row(mut self, cells: Vec<impl Into<CellValue>>) -> Self {
        self.rows.push(cells.into_iter().map(|c| c.into()).collect());
        self
    }

    /// Builds the dataset.
    pub fn build(self) -> Result<Dataset, ValidationError> {
        Dataset::new(self.columns, self.rows)
    }
}
