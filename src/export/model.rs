// src/export/model.rs

use crate::core::report::{Report, ReportRow};
use crate::core::scope::ReportScope;
use crate::models::WorkLogDetail;
use crate::utils::formatting::{decimal, money, rate};
use serde::Serialize;

/// Flat report row for CSV: fixed two decimals, no currency.
#[derive(Serialize, Clone, Debug)]
pub struct ReportCsvRow {
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Budget")]
    pub budget: String,
    #[serde(rename = "Expenses")]
    pub expenses: String,
    #[serde(rename = "Hours")]
    pub hours: String,
    #[serde(rename = "Profitability")]
    pub profitability: String,
}

impl From<&ReportRow> for ReportCsvRow {
    fn from(r: &ReportRow) -> Self {
        Self {
            project: r.project.clone(),
            budget: decimal(r.budget),
            expenses: decimal(r.expenses),
            hours: decimal(r.hours),
            profitability: decimal(r.profitability),
        }
    }
}

/// Report as JSON document.
#[derive(Serialize, Debug)]
pub struct ReportJson<'a> {
    pub title: String,
    pub scope: String,
    pub include_finished: bool,
    pub currency: &'a str,
    pub rows: &'a [ReportRow],
}

impl<'a> ReportJson<'a> {
    pub fn new(report: &'a Report, currency: &'a str) -> Self {
        Self {
            title: report.title(),
            scope: report.scope.label(),
            include_finished: report.include_finished,
            currency,
            rows: &report.rows,
        }
    }
}

/// Work log detail row for CSV (worker, date, hours, notes).
#[derive(Serialize, Clone, Debug)]
pub struct WorkLogCsvRow {
    #[serde(rename = "Worker")]
    pub worker: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Hours")]
    pub hours: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl From<&WorkLogDetail> for WorkLogCsvRow {
    fn from(d: &WorkLogDetail) -> Self {
        Self {
            worker: d.worker.clone(),
            date: d.date.format("%Y-%m-%d").to_string(),
            hours: decimal(d.hours),
            notes: d.notes.clone(),
        }
    }
}

fn expenses_header(scope: &ReportScope) -> &'static str {
    match scope {
        ReportScope::AllTime => "Expenses",
        ReportScope::Month(_) => "Month Expenses",
    }
}

/// Header for the PDF report: project, budget, expenses, profitability.
pub(crate) fn pdf_headers(scope: &ReportScope) -> Vec<&'static str> {
    vec!["Project", "Budget", expenses_header(scope), "Profitability"]
}

pub(crate) fn pdf_rows(report: &Report, currency: &str) -> Vec<Vec<String>> {
    report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.project.clone(),
                money(r.budget, currency),
                money(r.expenses, currency),
                rate(r.profitability, currency),
            ]
        })
        .collect()
}

/// Header for XLSX and the on-screen table (all five columns).
pub(crate) fn table_headers(scope: &ReportScope) -> Vec<&'static str> {
    let hours = match scope {
        ReportScope::AllTime => "Hours",
        ReportScope::Month(_) => "Month Hours",
    };
    vec![
        "Project",
        "Budget",
        expenses_header(scope),
        hours,
        "Profitability",
    ]
}
