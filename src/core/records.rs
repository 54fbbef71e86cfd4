//! Record operations: create, close and delete, with validation.
//!
//! Every reference is checked here, before the store sees the record, so
//! the caller gets a precise error instead of a constraint failure.

use crate::errors::{AppError, AppResult};
use crate::models::{
    NewExpense, NewProject, NewWorkLog, NewWorker, Project, ProjectStatus, Worker,
};
use crate::store::RecordStore;
use crate::utils::date::is_friday;
use chrono::NaiveDate;

/// Default hours for a daily work log: shorter on Fridays.
pub fn suggested_hours(date: NaiveDate, default_hours: f64, friday_hours: f64) -> f64 {
    if is_friday(date) {
        friday_hours
    } else {
        default_hours
    }
}

fn require_name(field: &'static str, name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid(field, "must not be empty"));
    }
    Ok(())
}

fn require_non_negative(field: &'static str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid(
            field,
            format!("must be a non-negative amount (got {value})"),
        ));
    }
    Ok(())
}

fn non_blank(s: &Option<String>) -> Option<String> {
    s.as_ref()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

pub struct Records<'s> {
    store: &'s mut dyn RecordStore,
}

impl<'s> Records<'s> {
    pub fn new(store: &'s mut dyn RecordStore) -> Self {
        Self { store }
    }

    fn existing_project(&self, id: i64) -> AppResult<Project> {
        self.store
            .project(id)?
            .ok_or(AppError::MissingReference {
                entity: "Project",
                id,
            })
    }

    fn existing_worker(&self, id: i64) -> AppResult<Worker> {
        self.store.worker(id)?.ok_or(AppError::MissingReference {
            entity: "Worker",
            id,
        })
    }

    /// Create a project. A project created as `finished` is stamped with
    /// `end_date` (or `today`); any other status must not carry one.
    pub fn add_project(&mut self, mut p: NewProject, today: NaiveDate) -> AppResult<i64> {
        require_name("name", &p.name)?;
        require_non_negative("budget", p.budget)?;

        p.name = p.name.trim().to_string();
        p.contractor = non_blank(&p.contractor);

        if p.status.is_finished() {
            p.end_date = Some(p.end_date.unwrap_or(today));
        } else if p.end_date.is_some() {
            return Err(AppError::invalid(
                "end_date",
                "can only be set on a finished project",
            ));
        }

        if let (Some(start), Some(end)) = (p.start_date, p.end_date)
            && end < start
        {
            return Err(AppError::invalid(
                "end_date",
                format!("{end} is before the start date {start}"),
            ));
        }

        self.store.insert_project(&p)
    }

    /// Move a project to `finished`, stamping the completion date.
    pub fn close_project(&mut self, id: i64, end_date: NaiveDate) -> AppResult<Project> {
        let project = self.store.project(id)?.ok_or(AppError::NotFound {
            entity: "project",
            key: id.to_string(),
        })?;

        if project.status.is_finished() {
            return Err(AppError::ProjectFinished(id));
        }

        if let Some(start) = project.start_date
            && end_date < start
        {
            return Err(AppError::invalid(
                "end_date",
                format!("{end_date} is before the start date {start}"),
            ));
        }

        self.store.finish_project(id, end_date)?;

        Ok(Project {
            status: ProjectStatus::Finished,
            end_date: Some(end_date),
            ..project
        })
    }

    pub fn add_worker(&mut self, mut w: NewWorker) -> AppResult<i64> {
        require_name("name", &w.name)?;
        w.name = w.name.trim().to_string();
        w.national_id = non_blank(&w.national_id);
        w.role = non_blank(&w.role);
        self.store.insert_worker(&w)
    }

    /// Record hours of a worker on a project. Finished projects are closed
    /// to new work logs.
    pub fn add_work_log(&mut self, l: NewWorkLog) -> AppResult<i64> {
        if !l.hours.is_finite() || l.hours <= 0.0 {
            return Err(AppError::invalid(
                "hours",
                format!("must be greater than zero (got {})", l.hours),
            ));
        }

        self.existing_worker(l.worker_id)?;
        let project = self.existing_project(l.project_id)?;

        if project.status.is_finished() {
            return Err(AppError::ProjectFinished(project.id));
        }

        self.store.insert_work_log(&l)
    }

    pub fn add_expense(&mut self, mut e: NewExpense) -> AppResult<i64> {
        require_non_negative("amount", e.amount)?;

        e.description = non_blank(&e.description);
        if e.description.is_some() && !e.category.allows_description() {
            return Err(AppError::invalid(
                "description",
                format!(
                    "only allowed for category 'other' (got '{}')",
                    e.category.to_db_str()
                ),
            ));
        }

        self.existing_project(e.project_id)?;

        self.store.insert_expense(&e)
    }

    /// Delete a project. Rejected while work logs or expenses point at it.
    pub fn delete_project(&mut self, id: i64) -> AppResult<Project> {
        let project = self.store.project(id)?.ok_or(AppError::NotFound {
            entity: "project",
            key: id.to_string(),
        })?;

        let logs = self.store.work_logs(Some(id))?.len();
        let expenses = self.store.expenses(Some(id))?.len();

        if logs > 0 || expenses > 0 {
            let mut parts = Vec::new();
            if logs > 0 {
                parts.push(plural(logs, "work log"));
            }
            if expenses > 0 {
                parts.push(plural(expenses, "expense"));
            }
            return Err(AppError::HasDependents {
                entity: "Project",
                id,
                dependents: parts.join(" and "),
            });
        }

        self.store.delete_project(id)?;
        Ok(project)
    }

    /// Delete a worker. Rejected while work logs point at it.
    pub fn delete_worker(&mut self, id: i64) -> AppResult<Worker> {
        let worker = self.store.worker(id)?.ok_or(AppError::NotFound {
            entity: "worker",
            key: id.to_string(),
        })?;

        let logs = self.store.work_logs_by_worker(id)?.len();
        if logs > 0 {
            return Err(AppError::HasDependents {
                entity: "Worker",
                id,
                dependents: plural(logs, "work log"),
            });
        }

        self.store.delete_worker(id)?;
        Ok(worker)
    }

    pub fn delete_work_log(&mut self, id: i64) -> AppResult<()> {
        if !self.store.delete_work_log(id)? {
            return Err(AppError::NotFound {
                entity: "work log",
                key: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn delete_expense(&mut self, id: i64) -> AppResult<()> {
        if !self.store.delete_expense(id)? {
            return Err(AppError::NotFound {
                entity: "expense",
                key: id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::{ReportAssembler, ReportOptions};
    use crate::core::scope::ReportScope;
    use crate::models::ExpenseCategory;
    use crate::store::MemoryStore;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn worker(name: &str) -> NewWorker {
        NewWorker {
            name: name.into(),
            national_id: None,
            role: None,
        }
    }

    fn work(worker_id: i64, project_id: i64, hours: f64) -> NewWorkLog {
        NewWorkLog {
            worker_id,
            project_id,
            date: d(2025, 6, 2),
            hours,
            notes: "montaje guías".into(),
        }
    }

    fn expense(project_id: i64, category: ExpenseCategory, description: Option<&str>) -> NewExpense {
        NewExpense {
            project_id,
            category,
            amount: 45.0,
            date: d(2025, 6, 2),
            description: description.map(String::from),
        }
    }

    #[test]
    fn suggests_six_hours_on_friday() {
        assert_eq!(suggested_hours(d(2025, 6, 13), 8.0, 6.0), 6.0);
        assert_eq!(suggested_hours(d(2025, 6, 12), 8.0, 6.0), 8.0);
    }

    #[test]
    fn rejects_missing_references() {
        let mut store = MemoryStore::new();
        let mut rec = Records::new(&mut store);
        let today = d(2025, 6, 1);
        let pid = rec.add_project(NewProject::new("Obra", 100.0), today).unwrap();

        let err = rec.add_work_log(work(42, pid, 8.0)).unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingReference {
                entity: "Worker",
                id: 42
            }
        ));

        let wid = rec.add_worker(worker("Ana")).unwrap();
        let err = rec.add_work_log(work(wid, 77, 8.0)).unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingReference {
                entity: "Project",
                id: 77
            }
        ));

        let err = rec
            .add_expense(expense(77, ExpenseCategory::Fuel, None))
            .unwrap_err();
        assert!(matches!(err, AppError::MissingReference { .. }));
    }

    #[test]
    fn validates_fields() {
        let mut store = MemoryStore::new();
        let mut rec = Records::new(&mut store);
        let today = d(2025, 6, 1);

        let err = rec
            .add_project(NewProject::new("  ", 10.0), today)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "name", .. }));

        let err = rec
            .add_project(NewProject::new("Obra", -1.0), today)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "budget", .. }));

        let pid = rec.add_project(NewProject::new("Obra", 10.0), today).unwrap();
        let wid = rec.add_worker(worker("Ana")).unwrap();

        let err = rec.add_work_log(work(wid, pid, 0.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "hours", .. }));
    }

    #[test]
    fn description_only_for_other_category() {
        let mut store = MemoryStore::new();
        let mut rec = Records::new(&mut store);
        let pid = rec
            .add_project(NewProject::new("Obra", 10.0), d(2025, 6, 1))
            .unwrap();

        let err = rec
            .add_expense(expense(pid, ExpenseCategory::Fuel, Some("diesel")))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation {
                field: "description",
                ..
            }
        ));

        rec.add_expense(expense(pid, ExpenseCategory::Fuel, Some("   ")))
            .unwrap();
        rec.add_expense(expense(pid, ExpenseCategory::Other, Some("grúa")))
            .unwrap();
        rec.add_expense(expense(pid, ExpenseCategory::Other, None))
            .unwrap();

        for e in store.expenses(Some(pid)).unwrap() {
            if e.category != ExpenseCategory::Other {
                assert!(e.description.is_none());
            }
        }
    }

    #[test]
    fn close_stamps_end_date_once() {
        let mut store = MemoryStore::new();
        let mut rec = Records::new(&mut store);
        let pid = rec
            .add_project(
                NewProject::new("Obra", 10.0).with_status(ProjectStatus::InProgress),
                d(2025, 6, 1),
            )
            .unwrap();

        let closed = rec.close_project(pid, d(2025, 6, 30)).unwrap();
        assert_eq!(closed.status, ProjectStatus::Finished);
        assert_eq!(closed.end_date, Some(d(2025, 6, 30)));

        let err = rec.close_project(pid, d(2025, 7, 1)).unwrap_err();
        assert!(matches!(err, AppError::ProjectFinished(_)));

        let wid = rec.add_worker(worker("Ana")).unwrap();
        let err = rec.add_work_log(work(wid, pid, 8.0)).unwrap_err();
        assert!(matches!(err, AppError::ProjectFinished(_)));
    }

    #[test]
    fn created_finished_projects_carry_end_date() {
        let mut store = MemoryStore::new();
        let mut rec = Records::new(&mut store);
        let today = d(2025, 6, 15);

        let pid = rec
            .add_project(
                NewProject::new("Ya hecha", 10.0).with_status(ProjectStatus::Finished),
                today,
            )
            .unwrap();

        let mut open = NewProject::new("Abierta", 10.0);
        open.end_date = Some(today);
        let err = rec.add_project(open, today).unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "end_date", .. }));

        let p = store.project(pid).unwrap().unwrap();
        assert_eq!(p.end_date, Some(today));
    }

    #[test]
    fn deletes_are_rejected_while_referenced() {
        let mut store = MemoryStore::new();
        let mut rec = Records::new(&mut store);
        let pid = rec
            .add_project(NewProject::new("Obra", 10.0), d(2025, 6, 1))
            .unwrap();
        let wid = rec.add_worker(worker("Ana")).unwrap();
        let lid = rec.add_work_log(work(wid, pid, 8.0)).unwrap();
        rec.add_expense(expense(pid, ExpenseCategory::Container, None))
            .unwrap();

        let err = rec.delete_project(pid).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Project #{pid} has 1 work log and 1 expense; delete those first")
        );
        assert!(matches!(
            rec.delete_worker(wid),
            Err(AppError::HasDependents { .. })
        ));

        rec.delete_work_log(lid).unwrap();
        rec.delete_worker(wid).unwrap();
        assert!(matches!(
            rec.delete_work_log(lid),
            Err(AppError::NotFound { .. })
        ));
    }

    #[test]
    fn report_row_reproduces_created_values() {
        let mut store = MemoryStore::new();
        let mut rec = Records::new(&mut store);
        let pid = rec
            .add_project(
                NewProject::new("Obra", 8765.43).with_status(ProjectStatus::InProgress),
                d(2025, 6, 1),
            )
            .unwrap();
        let wid = rec.add_worker(worker("Ana")).unwrap();
        rec.add_work_log(work(wid, pid, 7.25)).unwrap();
        let mut e = expense(pid, ExpenseCategory::Materials, None);
        e.amount = 321.09;
        rec.add_expense(e).unwrap();

        let report = ReportAssembler::new(&store)
            .assemble(&ReportOptions::new(ReportScope::AllTime))
            .unwrap();
        let row = &report.rows[0];
        assert_eq!(row.budget, 8765.43);
        assert_eq!(row.expenses, 321.09);
        assert_eq!(row.hours, 7.25);
    }
}
