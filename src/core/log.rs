use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// Returns the ANSI colour for an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51), // orange
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "export" => Colour::Green,
        _ => Colour::White,
    }
}

const OP_WIDTH: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut colored = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                colored.push_str(&format!(" ({target})"));
            }

            // truncate on visible characters, then colour only the operation again
            let visible = strip_ansi(&ansi, &colored);
            let shown = if visible.chars().count() > OP_WIDTH {
                let mut s = visible.chars().take(OP_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            let recolored = match shown.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(shown.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &recolored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                recolored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
