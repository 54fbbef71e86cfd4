use crate::cli::commands::or_dash;
use crate::cli::parser::WorkerCmd;
use crate::config::Config;
use crate::core::records::Records;
use crate::core::resolve::resolve_worker;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::NewWorker;
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::{no_data, success};
use crate::utils::formatting::hours;
use crate::utils::table::{Column, Table};

pub fn handle(action: &WorkerCmd, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_existing(&cfg.database)?;
    let mut store = SqliteStore::new(&pool.conn);

    match action {
        WorkerCmd::Add {
            name,
            national_id,
            role,
        } => {
            let id = Records::new(&mut store).add_worker(NewWorker {
                name: name.clone(),
                national_id: national_id.clone(),
                role: role.clone(),
            })?;
            success(format!("Worker #{id} '{}' registered", name.trim()));
        }

        WorkerCmd::List => list(&store)?,

        WorkerCmd::Del { worker } => {
            let id = resolve_worker(&store, worker)?;
            let deleted = Records::new(&mut store).delete_worker(id)?;
            success(format!("Worker #{} '{}' deleted", deleted.id, deleted.name));
        }
    }

    Ok(())
}

fn list(store: &dyn RecordStore) -> AppResult<()> {
    let workers = store.workers()?;
    if workers.is_empty() {
        no_data("no workers registered");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Name"),
        Column::left("National ID"),
        Column::left("Role"),
        Column::right("Logged"),
    ]);

    for w in workers {
        let logged: f64 = store.work_logs_by_worker(w.id)?.iter().map(|l| l.hours).sum();
        table.add_row(vec![
            w.id.to_string(),
            w.name,
            or_dash(w.national_id.as_deref()),
            or_dash(w.role.as_deref()),
            hours(logged),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
