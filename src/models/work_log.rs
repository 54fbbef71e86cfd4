use chrono::NaiveDate;
use serde::Serialize;

/// A daily work record ("parte").
#[derive(Debug, Clone, Serialize)]
pub struct WorkLog {
    pub id: i64,
    pub worker_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct NewWorkLog {
    pub worker_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: String,
}

/// WorkLog joined with its worker name, as shown in the project detail table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLogDetail {
    pub worker: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: String,
}
