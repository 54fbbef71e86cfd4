//! Reporting scope: all time, or one calendar month.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_name, parse_month};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a bare month selector ("6", "june") is matched against record dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthMatch {
    /// June of any year counts toward a June query.
    #[default]
    MonthOnly,
    /// Only June of the selected (or current) year counts.
    MonthAndYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFilter {
    pub month: u32,
    /// `None` matches the month in every year.
    pub year: Option<i32>,
}

impl MonthFilter {
    pub fn any_year(month: u32) -> Self {
        Self { month, year: None }
    }

    pub fn in_year(year: i32, month: u32) -> Self {
        Self {
            month,
            year: Some(year),
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && self.year.is_none_or(|y| date.year() == y)
    }

    /// Build a filter from a CLI selector.
    ///
    /// An explicit `YYYY-MM` always pins the year. A bare month pins the
    /// year of `today` only under [`MonthMatch::MonthAndYear`].
    pub fn from_selector(sel: &str, mode: MonthMatch, today: NaiveDate) -> AppResult<Self> {
        let (year, month) = parse_month(sel).ok_or_else(|| AppError::InvalidMonth(sel.into()))?;
        Ok(match (year, mode) {
            (Some(y), _) => Self::in_year(y, month),
            (None, MonthMatch::MonthOnly) => Self::any_year(month),
            (None, MonthMatch::MonthAndYear) => Self::in_year(today.year(), month),
        })
    }

    /// The month containing `today`, honouring the match mode.
    pub fn current(mode: MonthMatch, today: NaiveDate) -> Self {
        match mode {
            MonthMatch::MonthOnly => Self::any_year(today.month()),
            MonthMatch::MonthAndYear => Self::in_year(today.year(), today.month()),
        }
    }

    pub fn label(&self) -> String {
        match self.year {
            Some(y) => format!("{} {}", month_name(self.month), y),
            None => month_name(self.month).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    AllTime,
    Month(MonthFilter),
}

impl ReportScope {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            ReportScope::AllTime => true,
            ReportScope::Month(f) => f.matches(date),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ReportScope::AllTime => "all time".to_string(),
            ReportScope::Month(f) => f.label(),
        }
    }
}
