pub mod expense;
pub mod expense_category;
pub mod project;
pub mod project_status;
pub mod work_log;
pub mod worker;

pub use expense::{Expense, NewExpense};
pub use expense_category::ExpenseCategory;
pub use project::{NewProject, Project};
pub use project_status::ProjectStatus;
pub use work_log::{NewWorkLog, WorkLog, WorkLogDetail};
pub use worker::{NewWorker, Worker};
