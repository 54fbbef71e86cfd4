use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub national_id: Option<String>,
    pub role: Option<String>, // oficial, peón, ...
}

#[derive(Debug, Clone)]
pub struct NewWorker {
    pub name: String,
    pub national_id: Option<String>,
    pub role: Option<String>,
}
