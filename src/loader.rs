//! XLSX loading: uploaded workbook bytes to an in-memory [`Dataset`].
//!
//! The first sheet is the data sheet; its first row is the header row. Cell
//! types are taken as loosely as the workbook stores them — per-cell type
//! inference is calamine's, not ours — and anything unreadable becomes a
//! missing cell rather than an error. Only a workbook that cannot be parsed
//! at all fails.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook, open_workbook_from_rs};
use log::info;

use crate::{
    data::{Value, parse_naive_date, parse_naive_datetime},
    dataset::Dataset,
    error::ReportError,
};

/// Parses uploaded workbook bytes into a dataset.
pub fn load_workbook_bytes(bytes: &[u8]) -> Result<Dataset, ReportError> {
    let workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    dataset_from_workbook(workbook)
}

/// Convenience for presentation layers that spool the upload to disk.
pub fn load_workbook_path(path: &Path) -> Result<Dataset, ReportError> {
    let workbook: Xlsx<_> = open_workbook(path)?;
    dataset_from_workbook(workbook)
}

fn dataset_from_workbook<RS: Read + Seek>(mut workbook: Xlsx<RS>) -> Result<Dataset, ReportError> {
    let sheet_names = workbook.sheet_names().to_vec();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(ReportError::InvalidFormat(
            "workbook contains no sheets".to_string(),
        ));
    };

    let range = workbook.worksheet_range(sheet_name)?;
    let mut row_iter = range.rows();
    let columns = match row_iter.next() {
        Some(header_row) => header_names(header_row),
        None => Vec::new(),
    };
    let rows: Vec<Vec<Option<Value>>> = row_iter
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    let dataset = Dataset::new(columns, rows);
    info!(
        "Loaded {} row(s) x {} column(s) from sheet '{}'",
        dataset.row_count(),
        dataset.columns().len(),
        sheet_name
    );
    Ok(dataset)
}

/// Header cells rendered as text; a blank header gets a 1-based placeholder
/// so trailing unnamed columns are still captured.
fn header_names(header_row: &[Data]) -> Vec<String> {
    header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| match convert_cell(cell) {
            Some(value) => {
                let name = value.as_display();
                if name.trim().is_empty() {
                    placeholder_name(idx)
                } else {
                    name
                }
            }
            None => placeholder_name(idx),
        })
        .collect()
}

fn placeholder_name(idx: usize) -> String {
    format!("Column{}", idx + 1)
}

fn convert_cell(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(Value::Text(s.clone())),
        Data::Float(f) => Some(Value::Number(*f)),
        Data::Int(i) => Some(Value::Number(*i as f64)),
        Data::Bool(b) => Some(Value::Text(b.to_string())),
        Data::DateTime(dt) => dt.as_datetime().map(Value::DateTime),
        Data::DateTimeIso(s) => Some(
            parse_naive_datetime(s)
                .or_else(|| parse_naive_date(s).map(|d| d.and_time(chrono::NaiveTime::MIN)))
                .map(Value::DateTime)
                .unwrap_or_else(|| Value::Text(s.clone())),
        ),
        Data::DurationIso(s) => Some(Value::Text(s.clone())),
        Data::Error(_) => None,
    }
}
