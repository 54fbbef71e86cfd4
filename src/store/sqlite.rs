use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Expense, ExpenseCategory, NewExpense, NewProject, NewWorkLog, NewWorker, Project,
    ProjectStatus, WorkLog, Worker,
};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Params, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

/// `RecordStore` over a SQLite connection (see `db::migrate` for the schema).
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn query_all<T, P: Params>(
        &self,
        sql: &str,
        params: P,
        map: fn(&Row) -> Result<T>,
    ) -> AppResult<Vec<T>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params, map)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn delete(&mut self, table: &str, id: i64) -> AppResult<bool> {
        let n = self
            .conn
            .execute(&format!("DELETE FROM {table} WHERE id = ?1"), [id])?;
        Ok(n > 0)
    }
}

fn fmt_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn parse_date_col(row: &Row, col: &str) -> Result<NaiveDate> {
    let raw: String = row.get(col)?;
    let idx = row.as_ref().column_index(col)?;
    NaiveDate::parse_from_str(&raw, DATE_FMT)
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw.clone())))
}

fn parse_opt_date_col(row: &Row, col: &str) -> Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(_) => parse_date_col(row, col).map(Some),
    }
}

fn map_project(row: &Row) -> Result<Project> {
    let status_str: String = row.get("status")?;
    let status = ProjectStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_error(
            row.as_ref().column_index("status").unwrap_or(0),
            AppError::InvalidStatus(status_str.clone()),
        )
    })?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        budget: row.get("budget")?,
        status,
        contractor: row.get("contractor")?,
        start_date: parse_opt_date_col(row, "start_date")?,
        end_date: parse_opt_date_col(row, "end_date")?,
    })
}

fn map_worker(row: &Row) -> Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
        national_id: row.get("national_id")?,
        role: row.get("role")?,
    })
}

fn map_work_log(row: &Row) -> Result<WorkLog> {
    Ok(WorkLog {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        project_id: row.get("project_id")?,
        date: parse_date_col(row, "date")?,
        hours: row.get("hours")?,
        notes: row.get("notes")?,
    })
}

fn map_expense(row: &Row) -> Result<Expense> {
    let cat_str: String = row.get("category")?;
    let category = ExpenseCategory::from_db_str(&cat_str).ok_or_else(|| {
        conversion_error(
            row.as_ref().column_index("category").unwrap_or(0),
            AppError::InvalidCategory(cat_str.clone()),
        )
    })?;

    Ok(Expense {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        category,
        amount: row.get("amount")?,
        date: parse_date_col(row, "date")?,
        description: row.get("description")?,
    })
}

const PROJECT_COLS: &str = "id, name, budget, status, contractor, start_date, end_date";
const WORKER_COLS: &str = "id, name, national_id, role";
const WORK_LOG_COLS: &str = "id, worker_id, project_id, date, hours, notes";
const EXPENSE_COLS: &str = "id, project_id, category, amount, date, description";

impl RecordStore for SqliteStore<'_> {
    fn insert_project(&mut self, p: &NewProject) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO projects (name, budget, status, contractor, start_date, end_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                p.name,
                p.budget,
                p.status.to_db_str(),
                p.contractor,
                p.start_date.map(fmt_date),
                p.end_date.map(fmt_date),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn insert_worker(&mut self, w: &NewWorker) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO workers (name, national_id, role) VALUES (?1, ?2, ?3)",
            params![w.name, w.national_id, w.role],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn insert_work_log(&mut self, l: &NewWorkLog) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO work_logs (worker_id, project_id, date, hours, notes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![l.worker_id, l.project_id, fmt_date(l.date), l.hours, l.notes],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn insert_expense(&mut self, e: &NewExpense) -> AppResult<i64> {
        self.conn.execute(
            "INSERT INTO expenses (project_id, category, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                e.project_id,
                e.category.to_db_str(),
                e.amount,
                fmt_date(e.date),
                e.description,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn project(&self, id: i64) -> AppResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("SELECT {PROJECT_COLS} FROM projects WHERE id = ?1"))?;
        Ok(stmt.query_row([id], map_project).optional()?)
    }

    fn worker(&self, id: i64) -> AppResult<Option<Worker>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("SELECT {WORKER_COLS} FROM workers WHERE id = ?1"))?;
        Ok(stmt.query_row([id], map_worker).optional()?)
    }

    fn projects(&self) -> AppResult<Vec<Project>> {
        self.query_all(
            &format!("SELECT {PROJECT_COLS} FROM projects ORDER BY id ASC"),
            [],
            map_project,
        )
    }

    fn workers(&self) -> AppResult<Vec<Worker>> {
        self.query_all(
            &format!("SELECT {WORKER_COLS} FROM workers ORDER BY id ASC"),
            [],
            map_worker,
        )
    }

    fn work_logs(&self, project_id: Option<i64>) -> AppResult<Vec<WorkLog>> {
        match project_id {
            None => self.query_all(
                &format!("SELECT {WORK_LOG_COLS} FROM work_logs ORDER BY id ASC"),
                [],
                map_work_log,
            ),
            Some(pid) => self.query_all(
                &format!(
                    "SELECT {WORK_LOG_COLS} FROM work_logs WHERE project_id = ?1 ORDER BY id ASC"
                ),
                [pid],
                map_work_log,
            ),
        }
    }

    fn work_logs_by_worker(&self, worker_id: i64) -> AppResult<Vec<WorkLog>> {
        self.query_all(
            &format!("SELECT {WORK_LOG_COLS} FROM work_logs WHERE worker_id = ?1 ORDER BY id ASC"),
            [worker_id],
            map_work_log,
        )
    }

    fn expenses(&self, project_id: Option<i64>) -> AppResult<Vec<Expense>> {
        match project_id {
            None => self.query_all(
                &format!("SELECT {EXPENSE_COLS} FROM expenses ORDER BY id ASC"),
                [],
                map_expense,
            ),
            Some(pid) => self.query_all(
                &format!(
                    "SELECT {EXPENSE_COLS} FROM expenses WHERE project_id = ?1 ORDER BY id ASC"
                ),
                [pid],
                map_expense,
            ),
        }
    }

    fn finish_project(&mut self, id: i64, end_date: NaiveDate) -> AppResult<()> {
        self.conn.execute(
            "UPDATE projects SET status = 'finished', end_date = ?1 WHERE id = ?2",
            params![fmt_date(end_date), id],
        )?;
        Ok(())
    }

    fn delete_project(&mut self, id: i64) -> AppResult<bool> {
        self.delete("projects", id)
    }

    fn delete_worker(&mut self, id: i64) -> AppResult<bool> {
        self.delete("workers", id)
    }

    fn delete_work_log(&mut self, id: i64) -> AppResult<bool> {
        self.delete("work_logs", id)
    }

    fn delete_expense(&mut self, id: i64) -> AppResult<bool> {
        self.delete("expenses", id)
    }
}
