#![allow(dead_code)]

use chrono::NaiveDate;
use spend_report::{Dataset, Value, write_dataset};

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn date_cell(y: i32, m: u32, d: u32) -> Option<Value> {
    Some(Value::DateTime(
        ymd(y, m, d).and_hms_opt(0, 0, 0).expect("valid time"),
    ))
}

pub fn text_cell(s: &str) -> Option<Value> {
    Some(Value::Text(s.to_string()))
}

pub fn number_cell(n: f64) -> Option<Value> {
    Some(Value::Number(n))
}

/// The reference invoice dataset used across the scenario tests:
/// three rows over InvoiceDate / Importo / Fornitore.
pub fn invoice_dataset() -> Dataset {
    Dataset::new(
        vec![
            "InvoiceDate".to_string(),
            "Importo".to_string(),
            "Fornitore".to_string(),
        ],
        vec![
            vec![date_cell(2024, 1, 5), number_cell(100.0), text_cell("Acme")],
            vec![date_cell(2024, 1, 20), number_cell(50.0), text_cell("Acme")],
            vec![date_cell(2024, 2, 10), number_cell(30.0), text_cell("Globex")],
        ],
    )
}

/// The reference dataset serialized to workbook bytes, as if uploaded.
pub fn invoice_workbook_bytes() -> Vec<u8> {
    write_dataset(&invoice_dataset()).expect("build invoice workbook")
}

/// A dataset whose headers match none of the role keyword sets.
pub fn anonymous_dataset() -> Dataset {
    Dataset::new(
        vec!["Id".to_string(), "Qty".to_string()],
        vec![
            vec![number_cell(1.0), number_cell(3.0)],
            vec![number_cell(2.0), number_cell(4.0)],
        ],
    )
}
