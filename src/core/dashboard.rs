//! Single-project dashboard: lifetime totals plus the work log detail.

use crate::core::aggregate::{AggregationEngine, profitability};
use crate::errors::{AppError, AppResult};
use crate::models::{Project, WorkLogDetail};
use crate::store::RecordStore;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ProjectDashboard {
    pub project: Project,
    pub expense_total: f64,
    pub hours_total: f64,
    pub profitability: f64,
    /// Newest first.
    pub details: Vec<WorkLogDetail>,
}

/// Work logs of one project joined with worker names, sorted by date
/// descending (ties keep creation order).
pub fn work_log_details(store: &dyn RecordStore, project_id: i64) -> AppResult<Vec<WorkLogDetail>> {
    let names: HashMap<i64, String> = store
        .workers()?
        .into_iter()
        .map(|w| (w.id, w.name))
        .collect();

    let mut details: Vec<WorkLogDetail> = store
        .work_logs(Some(project_id))?
        .into_iter()
        .map(|l| WorkLogDetail {
            worker: names
                .get(&l.worker_id)
                .cloned()
                .unwrap_or_else(|| format!("#{}", l.worker_id)),
            date: l.date,
            hours: l.hours,
            notes: l.notes,
        })
        .collect();

    details.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(details)
}

pub fn build_dashboard(store: &dyn RecordStore, project_id: i64) -> AppResult<ProjectDashboard> {
    let project = store.project(project_id)?.ok_or(AppError::NotFound {
        entity: "project",
        key: project_id.to_string(),
    })?;

    let engine = AggregationEngine::new(store);
    let expense_total = engine.expense_total(project_id)?;
    let hours_total = engine.hours_total(project_id)?;

    Ok(ProjectDashboard {
        profitability: profitability(project.budget, expense_total, hours_total),
        expense_total,
        hours_total,
        details: work_log_details(store, project_id)?,
        project,
    })
}
