pub mod backup;
pub mod config;
pub mod db;
pub mod expense;
pub mod export;
pub mod init;
pub mod log;
pub mod parts;
pub mod project;
pub mod report;
pub mod worker;

use crate::cli::parser::ScopeArgs;
use crate::config::Config;
use crate::core::report::ReportOptions;
use crate::core::resolve::resolve_project;
use crate::core::scope::{MonthFilter, ReportScope};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::utils::date::{parse_date, parse_date_or_today, today};
use chrono::NaiveDate;

/// `--date` argument, today when absent.
pub(crate) fn date_or_today(arg: Option<&String>) -> AppResult<NaiveDate> {
    parse_date_or_today(arg).ok_or_else(|| AppError::InvalidDate(arg.cloned().unwrap_or_default()))
}

pub(crate) fn optional_date(arg: Option<&String>) -> AppResult<Option<NaiveDate>> {
    arg.map(|s| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())))
        .transpose()
}

/// Translate `--month` / `--all-time` / `--include-finished` / `--project`
/// into assembler options. No month means the current one.
pub(crate) fn report_options(
    args: &ScopeArgs,
    cfg: &Config,
    store: &dyn RecordStore,
) -> AppResult<ReportOptions> {
    let scope = if args.all_time {
        ReportScope::AllTime
    } else {
        let filter = match &args.month {
            Some(sel) => MonthFilter::from_selector(sel, cfg.month_match, today())?,
            None => MonthFilter::current(cfg.month_match, today()),
        };
        ReportScope::Month(filter)
    };

    let mut opts = ReportOptions::new(scope);
    opts.include_finished = args.include_finished || cfg.include_finished;
    opts.project_id = args
        .project
        .as_deref()
        .map(|key| resolve_project(store, key))
        .transpose()?;
    Ok(opts)
}

pub(crate) fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("--").to_string()
}
