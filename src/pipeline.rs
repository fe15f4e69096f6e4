//! End-to-end pipeline entry point.
//!
//! Each user interaction triggers one full synchronous pass over freshly
//! loaded data: load, infer roles, filter, aggregate. Nothing is shared
//! between invocations; concurrent callers each work on their own copy.

use log::info;
use serde::Serialize;

use crate::{
    dataset::Dataset,
    error::ReportError,
    filter::{self, FilterSpec},
    loader,
    report::{self, Kpis, MonthlyTotal, SupplierTotal},
    roles::{self, RoleAssignment},
};

/// Download filename the presentation layer attaches to exported bytes.
pub const EXPORT_FILE_NAME: &str = "filtered_data.xlsx";

/// Standard MIME type for single-sheet open-XML spreadsheets.
pub const EXPORT_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Everything the presentation layer renders for one pipeline pass. The
/// `Option` aggregations are `None` whenever their prerequisite column role
/// was not identified; the caller checks before rendering the widget.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub roles: RoleAssignment,
    pub filtered: Dataset,
    pub kpis: Kpis,
    pub monthly: Option<Vec<MonthlyTotal>>,
    pub suppliers: Option<Vec<SupplierTotal>>,
}

/// Runs the full pipeline over uploaded workbook bytes.
///
/// `None` means nothing has been uploaded yet and yields
/// [`ReportError::NoFileProvided`], the distinct empty state that makes the
/// presentation layer show its upload prompt.
pub fn build_report(bytes: Option<&[u8]>, spec: &FilterSpec) -> Result<Report, ReportError> {
    let bytes = bytes.ok_or(ReportError::NoFileProvided)?;
    let dataset = loader::load_workbook_bytes(bytes)?;
    let roles = roles::infer_roles(dataset.columns());
    let filtered = filter::apply_filter(&dataset, &roles, spec);
    info!(
        "Report pass kept {} of {} row(s) (date col: {:?}, amount col: {:?}, supplier col: {:?})",
        filtered.row_count(),
        dataset.row_count(),
        roles.date,
        roles.amount,
        roles.supplier
    );

    let kpis = report::compute_kpis(&filtered, &roles);
    let monthly = report::monthly_totals(&filtered, &roles);
    let suppliers = report::supplier_totals(&filtered, &roles);
    Ok(Report {
        roles,
        filtered,
        kpis,
        monthly,
        suppliers,
    })
}
