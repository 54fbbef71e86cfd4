use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    PerDiem,   // dietas
    Fuel,      // gasolina
    Materials, // materiales
    Container, // contenedor
    Other,     // otros
}

impl ExpenseCategory {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ExpenseCategory::PerDiem => "per_diem",
            ExpenseCategory::Fuel => "fuel",
            ExpenseCategory::Materials => "materials",
            ExpenseCategory::Container => "container",
            ExpenseCategory::Other => "other",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "per_diem" => Some(ExpenseCategory::PerDiem),
            "fuel" => Some(ExpenseCategory::Fuel),
            "materials" => Some(ExpenseCategory::Materials),
            "container" => Some(ExpenseCategory::Container),
            "other" => Some(ExpenseCategory::Other),
            _ => None,
        }
    }

    /// Helper: parse user input (DB code, dashed code or Spanish label)
    pub fn from_code(code: &str) -> Option<Self> {
        let norm = code.trim().to_lowercase().replace('-', "_");
        Self::from_db_str(&norm).or(match norm.as_str() {
            "dietas" => Some(ExpenseCategory::PerDiem),
            "gasolina" => Some(ExpenseCategory::Fuel),
            "materiales" => Some(ExpenseCategory::Materials),
            "contenedor" => Some(ExpenseCategory::Container),
            "otros" => Some(ExpenseCategory::Other),
            _ => None,
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::PerDiem => "Per diem",
            ExpenseCategory::Fuel => "Fuel",
            ExpenseCategory::Materials => "Materials",
            ExpenseCategory::Container => "Container",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Only `other` expenses may carry a free-text description.
    pub fn allows_description(&self) -> bool {
        matches!(self, ExpenseCategory::Other)
    }
}
