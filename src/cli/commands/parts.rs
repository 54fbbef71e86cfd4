use crate::cli::commands::date_or_today;
use crate::cli::parser::PartsCmd;
use crate::config::Config;
use crate::core::records::{Records, suggested_hours};
use crate::core::resolve::{resolve_project, resolve_worker};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::NewWorkLog;
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::{info, no_data, success};
use crate::utils::formatting::hours;
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

pub fn handle(action: &PartsCmd, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_existing(&cfg.database)?;
    let mut store = SqliteStore::new(&pool.conn);

    match action {
        PartsCmd::Add {
            worker,
            project,
            date,
            hours: explicit,
            notes,
        } => {
            let worker_id = resolve_worker(&store, worker)?;
            let project_id = resolve_project(&store, project)?;
            let date = date_or_today(date.as_ref())?;

            let h = match explicit {
                Some(h) => *h,
                None => {
                    let h = suggested_hours(date, cfg.default_hours, cfg.friday_hours);
                    info(format!("No --hours given, using {} for {}", hours(h), date));
                    h
                }
            };

            let id = Records::new(&mut store).add_work_log(NewWorkLog {
                worker_id,
                project_id,
                date,
                hours: h,
                notes: notes.trim().to_string(),
            })?;
            success(format!("Work log #{id} saved: {} on {}", hours(h), date));
        }

        PartsCmd::List { project } => {
            let pid = project
                .as_deref()
                .map(|key| resolve_project(&store, key))
                .transpose()?;
            list(&store, pid)?;
        }

        PartsCmd::Del { id } => {
            Records::new(&mut store).delete_work_log(*id)?;
            success(format!("Work log #{id} deleted"));
        }
    }

    Ok(())
}

fn list(store: &dyn RecordStore, project_id: Option<i64>) -> AppResult<()> {
    let logs = store.work_logs(project_id)?;
    if logs.is_empty() {
        no_data("no work logs found");
        return Ok(());
    }

    let workers: HashMap<i64, String> =
        store.workers()?.into_iter().map(|w| (w.id, w.name)).collect();
    let projects: HashMap<i64, String> =
        store.projects()?.into_iter().map(|p| (p.id, p.name)).collect();

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Worker"),
        Column::left("Project"),
        Column::right("Hours"),
        Column::left("Notes"),
    ]);

    for l in logs {
        table.add_row(vec![
            l.id.to_string(),
            l.date.to_string(),
            workers.get(&l.worker_id).cloned().unwrap_or_default(),
            projects.get(&l.project_id).cloned().unwrap_or_default(),
            hours(l.hours),
            l.notes,
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
