use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

const TABLES: [(&str, &str); 4] = [
    ("projects", "Projects"),
    ("workers", "Workers"),
    ("work_logs", "Work logs"),
    ("expenses", "Expenses"),
];

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    for (table, label) in TABLES {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, count, RESET);
    }

    //
    // 3) DATE RANGE OF WORK LOGS
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM work_logs", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let fmt = |d: Option<String>| d.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Work log range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
