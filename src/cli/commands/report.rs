use crate::cli::commands::report_options;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{Report, ReportAssembler};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ChartSeries, render_terminal, table_headers};
use crate::store::SqliteStore;
use crate::ui::messages::{header, no_data};
use crate::utils::formatting::{hours, money, rate};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { scope, chart } = cmd {
        let pool = DbPool::open_existing(&cfg.database)?;
        let store = SqliteStore::new(&pool.conn);

        let opts = report_options(scope, cfg, &store)?;
        let report = ReportAssembler::new(&store).assemble(&opts)?;

        header(report.title());

        if report.is_empty() {
            no_data("no projects in the selected scope");
            return Ok(());
        }

        print!("{}", render_table(&report, &cfg.currency));

        if *chart {
            println!();
            print!(
                "{}",
                render_terminal(&ChartSeries::from_report(&report), &cfg.currency)
            );
        }
    }

    Ok(())
}

pub(crate) fn render_table(report: &Report, currency: &str) -> String {
    let columns = table_headers(&report.scope)
        .into_iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { Column::left(h) } else { Column::right(h) })
        .collect();
    let mut table = Table::new(columns);

    for r in &report.rows {
        table.add_row(vec![
            r.project.clone(),
            money(r.budget, currency),
            money(r.expenses, currency),
            hours(r.hours),
            rate(r.profitability, currency),
        ]);
    }

    table.render()
}
