//! Column-inference, filtering, and aggregation pipeline for XLSX
//! transaction reports.
//!
//! A presentation layer hands the pipeline uploaded workbook bytes plus the
//! user's [`FilterSpec`]; the pipeline infers which columns hold the date,
//! amount, and supplier, narrows the rows, and produces KPIs, a monthly
//! totals series, and a per-supplier distribution. The filtered (or
//! caller-edited) dataset can be serialized back to workbook bytes for
//! download. The whole pass is synchronous and owns its data: no state
//! survives between invocations.

pub mod data;
pub mod dataset;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod roles;

use std::{env, sync::OnceLock};

use log::LevelFilter;

pub use crate::{
    data::Value,
    dataset::Dataset,
    error::ReportError,
    export::{EXPORT_SHEET_NAME, write_dataset, write_dataset_to_path},
    filter::{DateRange, FilterSpec, apply_filter, distinct_suppliers, observed_date_range},
    loader::{load_workbook_bytes, load_workbook_path},
    pipeline::{EXPORT_FILE_NAME, EXPORT_MIME, Report, build_report},
    report::{Kpis, MonthlyTotal, SupplierTotal, compute_kpis, monthly_totals, supplier_totals},
    roles::{ColumnRole, RoleAssignment, infer_roles},
};

static LOGGER: OnceLock<()> = OnceLock::new();

/// Initializes the process-wide logger once; safe to call from every
/// presentation-layer entry point.
pub fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("spend_report", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}
