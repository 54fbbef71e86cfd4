// src/export/pdf_export.rs

use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::model::{pdf_headers, pdf_rows};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Relative widths: project name gets the widest cell.
const COLUMN_WEIGHTS: [f32; 4] = [4.0, 2.0, 2.0, 2.0];

/// Report PDF: one row per project, fixed-width cells, currency suffixed.
pub(crate) fn export_report_pdf(report: &Report, currency: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = pdf_headers(&report.scope);
    let rows = pdf_rows(report, currency);

    let mut pdf = PdfManager::new();
    let widths = pdf.fixed_widths(&COLUMN_WEIGHTS);
    pdf.write_table(&report.title(), &headers, &rows, &widths);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
