use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    NotStarted, // no iniciada
    InProgress, // en curso
    Blocked,    // bloqueada
    Finished,   // finalizada
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::Blocked,
        ProjectStatus::Finished,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "not_started",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Blocked => "blocked",
            ProjectStatus::Finished => "finished",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "not_started" => Some(ProjectStatus::NotStarted),
            "in_progress" => Some(ProjectStatus::InProgress),
            "blocked" => Some(ProjectStatus::Blocked),
            "finished" => Some(ProjectStatus::Finished),
            _ => None,
        }
    }

    /// Helper: parse user input. Accepts the DB code, dashes instead of
    /// underscores and the Spanish labels used on site.
    pub fn from_code(code: &str) -> Option<Self> {
        let norm = code.trim().to_lowercase().replace(['-', ' '], "_");
        Self::from_db_str(&norm).or(match norm.as_str() {
            "no_iniciada" => Some(ProjectStatus::NotStarted),
            "en_curso" => Some(ProjectStatus::InProgress),
            "bloqueada" => Some(ProjectStatus::Blocked),
            "finalizada" => Some(ProjectStatus::Finished),
            _ => None,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not started",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Blocked => "Blocked",
            ProjectStatus::Finished => "Finished",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, ProjectStatus::Finished)
    }
}
