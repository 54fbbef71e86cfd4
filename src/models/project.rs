use super::project_status::ProjectStatus;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,                 // ⇔ projects.name (not unique)
    pub budget: f64,                  // ⇔ projects.budget (REAL >= 0)
    pub status: ProjectStatus,        // ⇔ projects.status
    pub contractor: Option<String>,   // ⇔ projects.contractor
    pub start_date: Option<NaiveDate>, // ⇔ projects.start_date
    pub end_date: Option<NaiveDate>,  // ⇔ projects.end_date, only when finished
}

/// Input for a project that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub budget: f64,
    pub status: ProjectStatus,
    pub contractor: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// Only meaningful when `status` is `Finished`.
    pub end_date: Option<NaiveDate>,
}

impl NewProject {
    pub fn new(name: &str, budget: f64) -> Self {
        Self {
            name: name.to_string(),
            budget,
            status: ProjectStatus::NotStarted,
            contractor: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}
