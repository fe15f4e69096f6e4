use thiserror::Error;

/// Pipeline-boundary errors. Per-cell problems (unparseable dates,
/// non-numeric amounts) are coerced to missing values and never surface
/// here; only whole-workbook failures propagate.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No upload yet: the empty state, not a failure. The presentation layer
    /// shows its upload prompt instead of an error message.
    #[error("no spreadsheet provided")]
    NoFileProvided,

    /// The uploaded bytes are not a well-formed XLSX workbook.
    #[error("invalid spreadsheet: {0}")]
    Format(#[from] calamine::XlsxError),

    /// Structurally valid workbook that cannot be used as a dataset.
    #[error("invalid spreadsheet: {0}")]
    InvalidFormat(String),

    /// Serializing the dataset back to XLSX failed.
    #[error("failed to write spreadsheet: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}
