use crate::cli::commands::{date_or_today, optional_date, or_dash};
use crate::cli::parser::ProjectCmd;
use crate::config::Config;
use crate::core::dashboard::{ProjectDashboard, build_dashboard};
use crate::core::records::Records;
use crate::core::resolve::resolve_project;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::{NewProject, ProjectStatus};
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::{header, no_data, success};
use crate::utils::colors::{RESET, color_for_profitability};
use crate::utils::date::today;
use crate::utils::formatting::{bold, hours, money, rate};
use crate::utils::table::{Column, Table};

/// Notes column wraps at this width in the dashboard.
const NOTES_WIDTH: usize = 40;

fn parse_status(code: &str) -> AppResult<ProjectStatus> {
    ProjectStatus::from_code(code).ok_or_else(|| {
        let known: Vec<&str> = ProjectStatus::ALL.iter().map(|s| s.to_db_str()).collect();
        AppError::InvalidStatus(format!("{code} (expected {})", known.join(" | ")))
    })
}

pub fn handle(action: &ProjectCmd, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_existing(&cfg.database)?;
    let mut store = SqliteStore::new(&pool.conn);

    match action {
        ProjectCmd::Add {
            name,
            budget,
            status,
            contractor,
            start_date,
            end_date,
        } => {
            let mut p = NewProject::new(name, *budget);
            if let Some(code) = status {
                p.status = parse_status(code)?;
            }
            p.contractor = contractor.clone();
            p.start_date = optional_date(start_date.as_ref())?;
            p.end_date = optional_date(end_date.as_ref())?;

            let id = Records::new(&mut store).add_project(p, today())?;
            success(format!("Project #{id} '{}' created", name.trim()));
        }

        ProjectCmd::Close { project, date } => {
            let id = resolve_project(&store, project)?;
            let end = date_or_today(date.as_ref())?;
            let closed = Records::new(&mut store).close_project(id, end)?;
            success(format!(
                "Project #{} '{}' finished on {}",
                closed.id, closed.name, end
            ));
        }

        ProjectCmd::List { status } => {
            let filter = status.as_deref().map(parse_status).transpose()?;
            list(&store, filter, &cfg.currency)?;
        }

        ProjectCmd::Show {
            project,
            export,
            format,
            force,
        } => {
            let id = resolve_project(&store, project)?;
            let dashboard = build_dashboard(&store, id)?;
            print_dashboard(&dashboard, &cfg.currency);

            if let Some(file) = export {
                let format = format
                    .or_else(|| ExportFormat::from_path(std::path::Path::new(file)))
                    .unwrap_or(ExportFormat::Csv);
                let path = ExportLogic::export_work_logs(
                    &dashboard.project.name,
                    &dashboard.details,
                    format,
                    file,
                    *force,
                )?;
                ttlog(
                    &pool.conn,
                    "export",
                    &path.to_string_lossy(),
                    &format!(
                        "Work logs of project #{} exported as {}",
                        id,
                        format.as_str()
                    ),
                )?;
            }
        }

        ProjectCmd::Del { project } => {
            let id = resolve_project(&store, project)?;
            let deleted = Records::new(&mut store).delete_project(id)?;
            success(format!("Project #{} '{}' deleted", deleted.id, deleted.name));
        }
    }

    Ok(())
}

fn list(store: &dyn RecordStore, status: Option<ProjectStatus>, currency: &str) -> AppResult<()> {
    let projects: Vec<_> = store
        .projects()?
        .into_iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .collect();

    if projects.is_empty() {
        no_data("no projects found");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Name"),
        Column::right("Budget"),
        Column::left("Status"),
        Column::left("Contractor"),
        Column::left("Start"),
        Column::left("End"),
    ]);

    for p in projects {
        table.add_row(vec![
            p.id.to_string(),
            p.name,
            money(p.budget, currency),
            p.status.label().to_string(),
            or_dash(p.contractor.as_deref()),
            or_dash(p.start_date.map(|d| d.to_string()).as_deref()),
            or_dash(p.end_date.map(|d| d.to_string()).as_deref()),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

fn print_dashboard(d: &ProjectDashboard, currency: &str) {
    let p = &d.project;
    header(format!("#{} {}", p.id, p.name));

    println!("{:<16}{}", "Status:", p.status.label());
    if let Some(c) = &p.contractor {
        println!("{:<16}{}", "Contractor:", c);
    }
    println!("{:<16}{}", "Budget:", money(p.budget, currency));
    println!("{:<16}{}", "Expenses:", money(d.expense_total, currency));
    println!("{:<16}{}", "Hours:", hours(d.hours_total));
    println!(
        "{:<16}{}{}{}",
        "Profitability:",
        color_for_profitability(d.profitability),
        bold(&rate(d.profitability, currency)),
        RESET
    );
    println!();

    if d.details.is_empty() {
        no_data("no work logs for this project");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("Worker"),
        Column::left("Date"),
        Column::right("Hours"),
        Column::left("Notes"),
    ]);

    for log in &d.details {
        let wrapped = textwrap::wrap(&log.notes, NOTES_WIDTH);
        let mut lines = wrapped.iter();
        table.add_row(vec![
            log.worker.clone(),
            log.date.to_string(),
            hours(log.hours),
            lines.next().map(|l| l.to_string()).unwrap_or_default(),
        ]);
        for more in lines {
            table.add_row(vec![String::new(), String::new(), String::new(), more.to_string()]);
        }
    }

    print!("{}", table.render());
}
