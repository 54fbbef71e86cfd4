use crate::cli::commands::date_or_today;
use crate::cli::parser::ExpenseCmd;
use crate::config::Config;
use crate::core::records::Records;
use crate::core::resolve::resolve_project;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ExpenseCategory, NewExpense};
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::{no_data, success};
use crate::utils::formatting::money;
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

pub fn handle(action: &ExpenseCmd, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_existing(&cfg.database)?;
    let mut store = SqliteStore::new(&pool.conn);

    match action {
        ExpenseCmd::Add {
            project,
            category,
            amount,
            date,
            description,
        } => {
            let project_id = resolve_project(&store, project)?;
            let category = ExpenseCategory::from_code(category)
                .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;
            let date = date_or_today(date.as_ref())?;

            let id = Records::new(&mut store).add_expense(NewExpense {
                project_id,
                category,
                amount: *amount,
                date,
                description: description.clone(),
            })?;
            success(format!(
                "Expense #{id} saved: {} ({}) on {}",
                money(*amount, &cfg.currency),
                category.label(),
                date
            ));
        }

        ExpenseCmd::List { project } => {
            let pid = project
                .as_deref()
                .map(|key| resolve_project(&store, key))
                .transpose()?;
            list(&store, pid, &cfg.currency)?;
        }

        ExpenseCmd::Del { id } => {
            Records::new(&mut store).delete_expense(*id)?;
            success(format!("Expense #{id} deleted"));
        }
    }

    Ok(())
}

fn list(store: &dyn RecordStore, project_id: Option<i64>, currency: &str) -> AppResult<()> {
    let expenses = store.expenses(project_id)?;
    if expenses.is_empty() {
        no_data("no expenses found");
        return Ok(());
    }

    let projects: HashMap<i64, String> =
        store.projects()?.into_iter().map(|p| (p.id, p.name)).collect();

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Project"),
        Column::left("Category"),
        Column::right("Amount"),
        Column::left("Description"),
    ]);

    let mut total = 0.0;
    for e in expenses {
        total += e.amount;
        table.add_row(vec![
            e.id.to_string(),
            e.date.to_string(),
            projects.get(&e.project_id).cloned().unwrap_or_default(),
            e.category.label().to_string(),
            money(e.amount, currency),
            e.description.unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
    println!("\nTotal: {}", money(total, currency));
    Ok(())
}
