mod common;

use anyhow::Result;
use common::{date_cell, invoice_dataset, number_cell, text_cell};
use spend_report::{
    Dataset, ReportError, Value, load_workbook_bytes, load_workbook_path, write_dataset,
    write_dataset_to_path,
};
use tempfile::tempdir;

#[test]
fn export_then_load_reproduces_the_dataset() -> Result<()> {
    let original = invoice_dataset();
    let bytes = write_dataset(&original)?;
    let reloaded = load_workbook_bytes(&bytes)?;
    assert_eq!(reloaded, original);
    Ok(())
}

#[test]
fn round_trip_preserves_missing_cells_and_mixed_types() -> Result<()> {
    let original = Dataset::new(
        vec!["Data".to_string(), "Amount".to_string(), "Note".to_string()],
        vec![
            vec![date_cell(2023, 12, 31), number_cell(12.75), text_cell("ok")],
            vec![None, number_cell(-3.0), None],
            vec![text_cell("tbd"), None, text_cell("follow up")],
        ],
    );
    let reloaded = load_workbook_bytes(&write_dataset(&original)?)?;
    assert_eq!(reloaded, original);
    Ok(())
}

#[test]
fn round_trip_keeps_timestamps_to_the_second() -> Result<()> {
    let stamp = common::ymd(2024, 6, 1).and_hms_opt(14, 30, 5).unwrap();
    let original = Dataset::new(
        vec!["Data".to_string()],
        vec![vec![Some(Value::DateTime(stamp))]],
    );
    let reloaded = load_workbook_bytes(&write_dataset(&original)?)?;
    assert_eq!(reloaded.cell(0, 0), Some(&Value::DateTime(stamp)));
    Ok(())
}

#[test]
fn edited_dataset_exports_like_any_other() -> Result<()> {
    let original = invoice_dataset();
    // simulate an inline edit: bump one amount, blank one supplier
    let mut rows: Vec<Vec<Option<Value>>> = original.rows().to_vec();
    rows[1][1] = number_cell(75.0);
    rows[2][2] = None;
    let edited = Dataset::new(original.columns().to_vec(), rows);

    let reloaded = load_workbook_bytes(&write_dataset(&edited)?)?;
    assert_eq!(reloaded, edited);
    assert_eq!(reloaded.cell(1, 1), Some(&Value::Number(75.0)));
    assert_eq!(reloaded.cell(2, 2), None);
    Ok(())
}

#[test]
fn path_based_io_round_trips_through_disk() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join(spend_report::EXPORT_FILE_NAME);
    let original = invoice_dataset();
    write_dataset_to_path(&original, &path)?;
    let reloaded = load_workbook_path(&path)?;
    assert_eq!(reloaded, original);
    Ok(())
}

#[test]
fn loading_a_non_workbook_file_fails_with_format_error() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("upload.xlsx");
    std::fs::write(&path, b"<html>not a spreadsheet</html>")?;
    let result = load_workbook_path(&path);
    assert!(matches!(result, Err(ReportError::Format(_))));
    Ok(())
}

#[test]
fn empty_dataset_round_trips_to_headers_only() -> Result<()> {
    let original = Dataset::new(
        vec!["InvoiceDate".to_string(), "Importo".to_string()],
        Vec::new(),
    );
    let reloaded = load_workbook_bytes(&write_dataset(&original)?)?;
    assert_eq!(reloaded, original);
    assert!(reloaded.is_empty());
    Ok(())
}
