use super::expense_category::ExpenseCategory;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i64,
    pub project_id: i64,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: Option<String>, // only for `other`
}

#[derive(Debug, Clone)]
pub struct NewExpense {
    pub project_id: i64,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: Option<String>,
}
