// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check that `path` may be created or overwritten.
///
/// A missing file, or `force`, passes straight through. Otherwise the user
/// is asked before the existing file is replaced.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if is_yes(&answer) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "cancelled, '{}' not overwritten (use --force)",
            path.display()
        )))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_english_and_spanish_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" Sí "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }

    #[test]
    fn missing_file_is_writable() {
        let p = std::env::temp_dir().join("obralog_fs_utils_missing.csv");
        let _ = std::fs::remove_file(&p);
        assert!(ensure_writable(&p, false).is_ok());
    }
}
