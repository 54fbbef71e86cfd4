//! Aggregation engine: expense and hour sums per project, and profitability.
//!
//! Everything is recomputed from the store on each call. Totals are summed
//! raw; only the profitability figure is rounded (to two decimals).

use crate::core::scope::{MonthFilter, ReportScope};
use crate::errors::AppResult;
use crate::models::Project;
use crate::store::RecordStore;

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `(budget - expense_total) / hours_total`, rounded to two decimals.
///
/// With no hours recorded the result is `0.0`: "unmeasured" is reported the
/// same as break-even rather than as an infinite rate.
pub fn profitability(budget: f64, expense_total: f64, hours_total: f64) -> f64 {
    if hours_total > 0.0 {
        round2((budget - expense_total) / hours_total)
    } else {
        0.0
    }
}

/// The numbers behind one report row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectFigures {
    pub expense_total: f64,
    pub hours_total: f64,
    pub expense_in_scope: f64,
    pub hours_in_scope: f64,
    /// Lifetime figure, whatever the scope.
    pub profitability: f64,
}

pub struct AggregationEngine<'s> {
    store: &'s dyn RecordStore,
}

impl<'s> AggregationEngine<'s> {
    pub fn new(store: &'s dyn RecordStore) -> Self {
        Self { store }
    }

    pub fn expense_in_scope(&self, project_id: i64, scope: &ReportScope) -> AppResult<f64> {
        Ok(self
            .store
            .expenses(Some(project_id))?
            .iter()
            .filter(|e| scope.contains(e.date))
            .map(|e| e.amount)
            .sum())
    }

    pub fn hours_in_scope(&self, project_id: i64, scope: &ReportScope) -> AppResult<f64> {
        Ok(self
            .store
            .work_logs(Some(project_id))?
            .iter()
            .filter(|l| scope.contains(l.date))
            .map(|l| l.hours)
            .sum())
    }

    pub fn expense_total(&self, project_id: i64) -> AppResult<f64> {
        self.expense_in_scope(project_id, &ReportScope::AllTime)
    }

    pub fn expense_in_month(&self, project_id: i64, month: MonthFilter) -> AppResult<f64> {
        self.expense_in_scope(project_id, &ReportScope::Month(month))
    }

    pub fn hours_total(&self, project_id: i64) -> AppResult<f64> {
        self.hours_in_scope(project_id, &ReportScope::AllTime)
    }

    pub fn hours_in_month(&self, project_id: i64, month: MonthFilter) -> AppResult<f64> {
        self.hours_in_scope(project_id, &ReportScope::Month(month))
    }

    /// Lifetime profitability of a project.
    pub fn profitability(&self, project: &Project) -> AppResult<f64> {
        Ok(profitability(
            project.budget,
            self.expense_total(project.id)?,
            self.hours_total(project.id)?,
        ))
    }

    pub fn figures(&self, project: &Project, scope: &ReportScope) -> AppResult<ProjectFigures> {
        let expense_total = self.expense_total(project.id)?;
        let hours_total = self.hours_total(project.id)?;

        let (expense_in_scope, hours_in_scope) = match scope {
            ReportScope::AllTime => (expense_total, hours_total),
            ReportScope::Month(_) => (
                self.expense_in_scope(project.id, scope)?,
                self.hours_in_scope(project.id, scope)?,
            ),
        };

        Ok(ProjectFigures {
            expense_total,
            hours_total,
            expense_in_scope,
            hours_in_scope,
            profitability: profitability(project.budget, expense_total, hours_total),
        })
    }
}
