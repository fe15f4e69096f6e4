//! In-memory tabular dataset.
//!
//! A [`Dataset`] is an ordered set of named columns over an ordered list of
//! rows. Column and row order are preserved from the source workbook. The
//! filter engine never mutates a dataset in place; it produces a narrowed
//! copy, so the filtered dataset is always a row-subset of its source.

use serde::{Deserialize, Serialize};

use crate::data::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Option<Value>>>,
}

impl Dataset {
    /// Builds a dataset, padding or truncating each row to the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<Value>>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<Value>>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column)).and_then(|c| c.as_ref())
    }

    /// Iterates one column top to bottom; missing cells yield `None`.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = Option<&Value>> {
        self.rows.iter().map(move |row| row.get(column).and_then(|c| c.as_ref()))
    }

    /// New dataset keeping only the rows `keep` accepts, in original order.
    pub fn retain_rows<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&[Option<Value>]) -> bool,
    {
        Dataset {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|row| keep(row)).cloned().collect(),
        }
    }
}
