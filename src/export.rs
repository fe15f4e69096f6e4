//! XLSX export: serializes a dataset (filtered or edited) back to workbook
//! bytes the presentation layer offers as a download.
//!
//! One header row in original column order, then one row per dataset row.
//! Datetimes are written with an explicit number format so a reload through
//! the loader recovers them as datetime cells, not bare serial numbers.

use std::path::Path;

use log::info;
use rust_xlsxwriter::{Format, Workbook};

use crate::{data::Value, dataset::Dataset, error::ReportError};

/// Fixed sheet name of the exported workbook.
pub const EXPORT_SHEET_NAME: &str = "FilteredData";

const DATETIME_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Serializes the dataset into downloadable XLSX bytes.
pub fn write_dataset(dataset: &Dataset) -> Result<Vec<u8>, ReportError> {
    let mut workbook = build_workbook(dataset)?;
    let bytes = workbook.save_to_buffer()?;
    info!(
        "Exported {} row(s) to a {}-byte workbook",
        dataset.row_count(),
        bytes.len()
    );
    Ok(bytes)
}

/// Serializes the dataset straight to a file on disk.
pub fn write_dataset_to_path(dataset: &Dataset, path: &Path) -> Result<(), ReportError> {
    let mut workbook = build_workbook(dataset)?;
    workbook.save(path)?;
    Ok(())
}

fn build_workbook(dataset: &Dataset) -> Result<Workbook, ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(EXPORT_SHEET_NAME)?;

    let datetime_format = Format::new().set_num_format(DATETIME_NUM_FORMAT);

    for (col, name) in dataset.columns().iter().enumerate() {
        worksheet.write_string(0, col as u16, name.as_str())?;
    }
    for (row_idx, row) in dataset.rows().iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                None => {}
                Some(Value::Number(n)) => {
                    worksheet.write_number(row_num, col, *n)?;
                }
                Some(Value::Text(s)) => {
                    worksheet.write_string(row_num, col, s.as_str())?;
                }
                Some(Value::DateTime(dt)) => {
                    worksheet.write_datetime_with_format(row_num, col, dt, &datetime_format)?;
                }
            }
        }
    }
    Ok(workbook)
}
