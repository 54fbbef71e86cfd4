use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // a missing file is created only by `init`
        let pool = DbPool::open_existing(&cfg.database)?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            let mut fk_stmt = pool.conn.prepare("PRAGMA foreign_key_check;")?;
            let orphans = fk_stmt.query_map([], |_| Ok(()))?.count();

            if integrity == "ok" && orphans == 0 {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!(
                    "{}✘ Integrity check failed:{} {} ({} foreign key violations)\n",
                    RED, RESET, integrity, orphans
                );
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
