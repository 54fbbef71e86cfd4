// src/export/logic.rs

use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::chart::export_report_svg;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ReportCsvRow, ReportJson, WorkLogCsvRow};
use crate::export::pdf_export::export_report_pdf;
use crate::export::xlsx::export_report_xlsx;
use crate::models::WorkLogDetail;
use crate::ui::messages::warning;
use crate::utils::path::absolute_output;
use serde::Serialize;
use std::path::PathBuf;

const REPORT_CSV_HEADERS: [&str; 5] = ["Project", "Budget", "Expenses", "Hours", "Profitability"];
const WORK_LOG_CSV_HEADERS: [&str; 4] = ["Worker", "Date", "Hours", "Notes"];

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Write an assembled report to `file` (absolute, `~` allowed).
    ///
    /// An empty report still produces a valid file: header-only CSV, an
    /// empty `rows` array in JSON, a "No data" PDF page.
    pub fn export_report(
        report: &Report,
        format: ExportFormat,
        file: &str,
        currency: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = absolute_output(file)?;
        ensure_writable(&path, force)?;

        if report.is_empty() {
            warning("No projects match the selected scope; writing an empty report.");
        }

        match format {
            ExportFormat::Csv => {
                let rows: Vec<ReportCsvRow> = report.rows.iter().map(ReportCsvRow::from).collect();
                export_csv(&rows, &REPORT_CSV_HEADERS, &path)?
            }
            ExportFormat::Json => export_json(&ReportJson::new(report, currency), &path)?,
            ExportFormat::Xlsx => export_report_xlsx(report, currency, &path)?,
            ExportFormat::Pdf => export_report_pdf(report, currency, &path)?,
            ExportFormat::Svg => export_report_svg(report, currency, &path)?,
        }

        Ok(path)
    }

    /// Write the work log detail of one project. Only tabular formats apply.
    pub fn export_work_logs(
        project: &str,
        details: &[WorkLogDetail],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = absolute_output(file)?;

        match format {
            ExportFormat::Csv => {
                ensure_writable(&path, force)?;
                let rows: Vec<WorkLogCsvRow> = details.iter().map(WorkLogCsvRow::from).collect();
                export_csv(&rows, &WORK_LOG_CSV_HEADERS, &path)?;
            }
            ExportFormat::Json => {
                ensure_writable(&path, force)?;
                export_json(&WorkLogJson { project, details }, &path)?;
            }
            other => {
                return Err(AppError::InvalidExportFormat(format!(
                    "{} (work logs support csv and json)",
                    other.as_str()
                )));
            }
        }

        Ok(path)
    }
}

#[derive(Serialize)]
struct WorkLogJson<'a> {
    project: &'a str,
    details: &'a [WorkLogDetail],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ReportRow;
    use crate::core::scope::ReportScope;
    use std::fs;

    fn tmp(name: &str) -> String {
        let p = std::env::temp_dir().join(name);
        let _ = fs::remove_file(&p);
        p.to_string_lossy().to_string()
    }

    fn report(rows: Vec<ReportRow>) -> Report {
        Report {
            scope: ReportScope::AllTime,
            include_finished: false,
            rows,
        }
    }

    #[test]
    fn empty_report_csv_has_header_only() {
        let file = tmp("obralog_logic_empty.csv");
        ExportLogic::export_report(&report(vec![]), ExportFormat::Csv, &file, "€", true).unwrap();
        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content.trim(), "Project,Budget,Expenses,Hours,Profitability");
    }

    #[test]
    fn report_json_carries_raw_numbers() {
        let file = tmp("obralog_logic_report.json");
        let r = report(vec![ReportRow {
            project_id: 1,
            project: "Nave".into(),
            budget: 1000.0,
            expenses: 100.0,
            hours: 10.0,
            profitability: 90.0,
        }]);
        ExportLogic::export_report(&r, ExportFormat::Json, &file, "€", true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(v["rows"][0]["project"], "Nave");
        assert_eq!(v["rows"][0]["profitability"], 90.0);
        assert!(v["rows"][0].get("project_id").is_none());
    }

    #[test]
    fn relative_path_is_rejected() {
        let res =
            ExportLogic::export_report(&report(vec![]), ExportFormat::Csv, "out.csv", "€", true);
        assert!(matches!(res, Err(AppError::Io(_))));
    }

    #[test]
    fn work_logs_refuse_pdf() {
        let file = tmp("obralog_logic_logs.pdf");
        let res = ExportLogic::export_work_logs("Nave", &[], ExportFormat::Pdf, &file, true);
        assert!(matches!(res, Err(AppError::InvalidExportFormat(_))));
    }
}
