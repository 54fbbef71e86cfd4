//! Record store abstraction.
//!
//! The aggregation engine, the report assembler and the record operations
//! only see a [`RecordStore`]; the CLI hands them a [`SqliteStore`] and the
//! unit tests a [`MemoryStore`].

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::{
    Expense, NewExpense, NewProject, NewWorkLog, NewWorker, Project, WorkLog, Worker,
};
use chrono::NaiveDate;

pub trait RecordStore {
    // ---------------------------
    // Create
    // ---------------------------
    fn insert_project(&mut self, project: &NewProject) -> AppResult<i64>;
    fn insert_worker(&mut self, worker: &NewWorker) -> AppResult<i64>;
    fn insert_work_log(&mut self, log: &NewWorkLog) -> AppResult<i64>;
    fn insert_expense(&mut self, expense: &NewExpense) -> AppResult<i64>;

    // ---------------------------
    // Read
    // ---------------------------
    fn project(&self, id: i64) -> AppResult<Option<Project>>;
    fn worker(&self, id: i64) -> AppResult<Option<Worker>>;

    /// All projects in creation order.
    fn projects(&self) -> AppResult<Vec<Project>>;

    /// All workers in creation order.
    fn workers(&self) -> AppResult<Vec<Worker>>;

    /// Work logs in creation order, optionally restricted to one project.
    fn work_logs(&self, project_id: Option<i64>) -> AppResult<Vec<WorkLog>>;

    /// Work logs of one worker, in creation order.
    fn work_logs_by_worker(&self, worker_id: i64) -> AppResult<Vec<WorkLog>>;

    /// Expenses in creation order, optionally restricted to one project.
    fn expenses(&self, project_id: Option<i64>) -> AppResult<Vec<Expense>>;

    // ---------------------------
    // Update (the only in-place change: closing a project)
    // ---------------------------
    fn finish_project(&mut self, id: i64, end_date: NaiveDate) -> AppResult<()>;

    // ---------------------------
    // Delete (hard, by id). Return false when nothing matched.
    // ---------------------------
    fn delete_project(&mut self, id: i64) -> AppResult<bool>;
    fn delete_worker(&mut self, id: i64) -> AppResult<bool>;
    fn delete_work_log(&mut self, id: i64) -> AppResult<bool>;
    fn delete_expense(&mut self, id: i64) -> AppResult<bool>;
}
