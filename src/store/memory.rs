use super::RecordStore;
use crate::errors::AppResult;
use crate::models::{
    Expense, NewExpense, NewProject, NewWorkLog, NewWorker, Project, ProjectStatus, WorkLog,
    Worker,
};
use chrono::NaiveDate;

/// Vec-backed store. Ids come from one counter shared by every entity.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Vec<Project>,
    workers: Vec<Worker>,
    work_logs: Vec<WorkLog>,
    expenses: Vec<Expense>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, id: i64, key: impl Fn(&T) -> i64) -> bool {
    let before = items.len();
    items.retain(|it| key(it) != id);
    items.len() != before
}

impl RecordStore for MemoryStore {
    fn insert_project(&mut self, p: &NewProject) -> AppResult<i64> {
        let id = self.fresh_id();
        self.projects.push(Project {
            id,
            name: p.name.clone(),
            budget: p.budget,
            status: p.status,
            contractor: p.contractor.clone(),
            start_date: p.start_date,
            end_date: p.end_date,
        });
        Ok(id)
    }

    fn insert_worker(&mut self, w: &NewWorker) -> AppResult<i64> {
        let id = self.fresh_id();
        self.workers.push(Worker {
            id,
            name: w.name.clone(),
            national_id: w.national_id.clone(),
            role: w.role.clone(),
        });
        Ok(id)
    }

    fn insert_work_log(&mut self, l: &NewWorkLog) -> AppResult<i64> {
        let id = self.fresh_id();
        self.work_logs.push(WorkLog {
            id,
            worker_id: l.worker_id,
            project_id: l.project_id,
            date: l.date,
            hours: l.hours,
            notes: l.notes.clone(),
        });
        Ok(id)
    }

    fn insert_expense(&mut self, e: &NewExpense) -> AppResult<i64> {
        let id = self.fresh_id();
        self.expenses.push(Expense {
            id,
            project_id: e.project_id,
            category: e.category,
            amount: e.amount,
            date: e.date,
            description: e.description.clone(),
        });
        Ok(id)
    }

    fn project(&self, id: i64) -> AppResult<Option<Project>> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    fn worker(&self, id: i64) -> AppResult<Option<Worker>> {
        Ok(self.workers.iter().find(|w| w.id == id).cloned())
    }

    fn projects(&self) -> AppResult<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn workers(&self) -> AppResult<Vec<Worker>> {
        Ok(self.workers.clone())
    }

    fn work_logs(&self, project_id: Option<i64>) -> AppResult<Vec<WorkLog>> {
        Ok(self
            .work_logs
            .iter()
            .filter(|l| project_id.is_none_or(|pid| l.project_id == pid))
            .cloned()
            .collect())
    }

    fn work_logs_by_worker(&self, worker_id: i64) -> AppResult<Vec<WorkLog>> {
        Ok(self
            .work_logs
            .iter()
            .filter(|l| l.worker_id == worker_id)
            .cloned()
            .collect())
    }

    fn expenses(&self, project_id: Option<i64>) -> AppResult<Vec<Expense>> {
        Ok(self
            .expenses
            .iter()
            .filter(|e| project_id.is_none_or(|pid| e.project_id == pid))
            .cloned()
            .collect())
    }

    fn finish_project(&mut self, id: i64, end_date: NaiveDate) -> AppResult<()> {
        if let Some(p) = self.projects.iter_mut().find(|p| p.id == id) {
            p.status = ProjectStatus::Finished;
            p.end_date = Some(end_date);
        }
        Ok(())
    }

    fn delete_project(&mut self, id: i64) -> AppResult<bool> {
        Ok(remove_by_id(&mut self.projects, id, |p| p.id))
    }

    fn delete_worker(&mut self, id: i64) -> AppResult<bool> {
        Ok(remove_by_id(&mut self.workers, id, |w| w.id))
    }

    fn delete_work_log(&mut self, id: i64) -> AppResult<bool> {
        Ok(remove_by_id(&mut self.work_logs, id, |l| l.id))
    }

    fn delete_expense(&mut self, id: i64) -> AppResult<bool> {
        Ok(remove_by_id(&mut self.expenses, id, |e| e.id))
    }
}
