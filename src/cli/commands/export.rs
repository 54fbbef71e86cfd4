use crate::cli::commands::report_options;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportAssembler;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::store::SqliteStore;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        scope,
        force,
    } = cmd
    {
        let pool = DbPool::open_existing(&cfg.database)?;
        let store = SqliteStore::new(&pool.conn);

        let format = format
            .or_else(|| ExportFormat::from_path(Path::new(file)))
            .unwrap_or(ExportFormat::Csv);

        let opts = report_options(scope, cfg, &store)?;
        let report = ReportAssembler::new(&store).assemble(&opts)?;

        let path = ExportLogic::export_report(&report, format, file, &cfg.currency, *force)?;

        ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} as {} ({} rows)",
                report.title(),
                format.as_str(),
                report.rows.len()
            ),
        )?;
    }
    Ok(())
}
