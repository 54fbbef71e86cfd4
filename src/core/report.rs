//! Report assembler: one row per selected project, presentation-agnostic.

use crate::core::aggregate::AggregationEngine;
use crate::core::scope::ReportScope;
use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::store::RecordStore;
use serde::Serialize;

/// Column order is fixed: project, budget, expenses, hours, profitability.
/// Values are raw numbers; currency and decimals are the adapters' business.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(skip)]
    pub project_id: i64,
    pub project: String,
    pub budget: f64,
    /// Expenses within the report scope.
    pub expenses: f64,
    /// Hours within the report scope.
    pub hours: f64,
    /// Lifetime profitability (currency per hour).
    pub profitability: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub scope: ReportScope,
    pub include_finished: bool,
    /// Restrict the report to a single project, whatever its status.
    pub project_id: Option<i64>,
}

impl ReportOptions {
    pub fn new(scope: ReportScope) -> Self {
        Self {
            scope,
            include_finished: false,
            project_id: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub scope: ReportScope,
    pub include_finished: bool,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn title(&self) -> String {
        format!("Profitability report: {}", self.scope.label())
    }
}

/// Default selection: every open project, plus finished projects closed
/// inside the scope. With `include_finished`, every project.
pub fn is_selected(project: &Project, scope: &ReportScope, include_finished: bool) -> bool {
    if include_finished || !project.status.is_finished() {
        return true;
    }
    project.end_date.is_some_and(|d| scope.contains(d))
}

pub struct ReportAssembler<'s> {
    store: &'s dyn RecordStore,
    engine: AggregationEngine<'s>,
}

impl<'s> ReportAssembler<'s> {
    pub fn new(store: &'s dyn RecordStore) -> Self {
        Self {
            store,
            engine: AggregationEngine::new(store),
        }
    }

    pub fn assemble(&self, opts: &ReportOptions) -> AppResult<Report> {
        let projects: Vec<Project> = match opts.project_id {
            Some(id) => vec![self.store.project(id)?.ok_or(AppError::NotFound {
                entity: "project",
                key: id.to_string(),
            })?],
            None => self
                .store
                .projects()?
                .into_iter()
                .filter(|p| is_selected(p, &opts.scope, opts.include_finished))
                .collect(),
        };

        let mut rows = Vec::with_capacity(projects.len());
        for p in projects {
            let f = self.engine.figures(&p, &opts.scope)?;
            rows.push(ReportRow {
                project_id: p.id,
                project: p.name,
                budget: p.budget,
                expenses: f.expense_in_scope,
                hours: f.hours_in_scope,
                profitability: f.profitability,
            });
        }

        Ok(Report {
            scope: opts.scope,
            include_finished: opts.include_finished,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scope::MonthFilter;
    use crate::models::{
        ExpenseCategory, NewExpense, NewProject, NewWorkLog, NewWorker, ProjectStatus,
    };
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn june() -> ReportScope {
        ReportScope::Month(MonthFilter::any_year(6))
    }

    fn finished(name: &str, end: NaiveDate) -> NewProject {
        let mut p = NewProject::new(name, 1000.0).with_status(ProjectStatus::Finished);
        p.end_date = Some(end);
        p
    }

    #[test]
    fn empty_store_gives_empty_report() {
        let store = MemoryStore::new();
        let report = ReportAssembler::new(&store)
            .assemble(&ReportOptions::new(june()))
            .unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn finished_project_visible_only_in_closing_month() {
        let mut store = MemoryStore::new();
        store
            .insert_project(&NewProject::new("Open", 500.0).with_status(ProjectStatus::Blocked))
            .unwrap();
        store
            .insert_project(&finished("Closed in June", d(2025, 6, 20)))
            .unwrap();

        let assembler = ReportAssembler::new(&store);

        let in_june = assembler.assemble(&ReportOptions::new(june())).unwrap();
        let names: Vec<&str> = in_june.rows.iter().map(|r| r.project.as_str()).collect();
        assert_eq!(names, ["Open", "Closed in June"]);

        let july = ReportScope::Month(MonthFilter::any_year(7));
        let in_july = assembler.assemble(&ReportOptions::new(july)).unwrap();
        let names: Vec<&str> = in_july.rows.iter().map(|r| r.project.as_str()).collect();
        assert_eq!(names, ["Open"]);

        let mut opts = ReportOptions::new(july);
        opts.include_finished = true;
        assert_eq!(assembler.assemble(&opts).unwrap().rows.len(), 2);
    }

    #[test]
    fn rows_mix_monthly_sums_with_lifetime_profitability() {
        let mut store = MemoryStore::new();
        let pid = store
            .insert_project(
                &NewProject::new("Ascensor", 10000.0).with_status(ProjectStatus::InProgress),
            )
            .unwrap();
        let wid = store
            .insert_worker(&NewWorker {
                name: "Luis".into(),
                national_id: None,
                role: Some("oficial".into()),
            })
            .unwrap();
        for (date, hours) in [(d(2025, 5, 5), 60.0), (d(2025, 6, 5), 40.0)] {
            store
                .insert_work_log(&NewWorkLog {
                    worker_id: wid,
                    project_id: pid,
                    date,
                    hours,
                    notes: String::new(),
                })
                .unwrap();
        }
        for (date, amount) in [(d(2025, 5, 9), 1200.0), (d(2025, 6, 9), 800.0)] {
            store
                .insert_expense(&NewExpense {
                    project_id: pid,
                    category: ExpenseCategory::Fuel,
                    amount,
                    date,
                    description: None,
                })
                .unwrap();
        }

        let report = ReportAssembler::new(&store)
            .assemble(&ReportOptions::new(june()))
            .unwrap();

        assert_eq!(
            report.rows,
            vec![ReportRow {
                project_id: pid,
                project: "Ascensor".into(),
                budget: 10000.0,
                expenses: 800.0,
                hours: 40.0,
                profitability: 80.0,
            }]
        );
    }

    #[test]
    fn single_project_selection_ignores_status() {
        let mut store = MemoryStore::new();
        let pid = store
            .insert_project(&finished("Old job", d(2024, 1, 31)))
            .unwrap();

        let mut opts = ReportOptions::new(june());
        opts.project_id = Some(pid);
        let report = ReportAssembler::new(&store).assemble(&opts).unwrap();
        assert_eq!(report.rows.len(), 1);

        opts.project_id = Some(pid + 100);
        assert!(matches!(
            ReportAssembler::new(&store).assemble(&opts),
            Err(AppError::NotFound { .. })
        ));
    }
}
