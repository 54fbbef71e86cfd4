// src/export/mod.rs

pub mod chart;
pub(crate) mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use chart::{ChartSeries, render_terminal};
pub use logic::ExportLogic;
pub use model::{ReportCsvRow, WorkLogCsvRow};
pub(crate) use model::table_headers;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every exporter.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
    Svg,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Svg => "svg",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        <Self as ValueEnum>::from_str(&ext, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("/tmp/informe.PDF")),
            Some(ExportFormat::Pdf)
        );
        assert_eq!(ExportFormat::from_path(Path::new("/tmp/informe")), None);
        assert_eq!(ExportFormat::from_path(Path::new("/tmp/a.txt")), None);
    }
}
