//! File exports of a lead table: CSV and a paginated PDF report.

mod csv_rows;
mod latin1;
mod pdf;

pub use self::csv_rows::{
    build_compact_rows, build_csv_rows, leads_to_csv, write_csv, CompactLeadCsvRow, CsvColumns,
    LeadCsvRow,
};
pub use self::latin1::to_latin1_safe;
pub use self::pdf::{layout_report, leads_to_pdf, write_pdf, PdfLine};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pdf error: {0}")]
    Pdf(String),
}
