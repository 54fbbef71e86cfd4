// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize + ?Sized>(data: &T, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header row comes from serde field names).
///
/// An empty dataset still gets its header row.
pub(crate) fn export_csv<T: Serialize>(
    rows: &[T],
    headers: &[&str],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let to_err = |e: csv::Error| AppError::from(io::Error::other(format!("CSV write error: {e}")));

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!rows.is_empty())
        .from_path(path)
        .map_err(to_err)?;

    if rows.is_empty() {
        wtr.write_record(headers).map_err(to_err)?;
    }

    for item in rows {
        wtr.serialize(item).map_err(to_err)?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
