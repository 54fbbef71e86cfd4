use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{success, warning};
use crate::utils::path::absolute_output;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally compressing it
    /// (zip on Windows, tar.gz elsewhere).
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = absolute_output(dest_file)?;

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&dest, force)?;

        fs::copy(src, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(&dest)?;
            if let Err(e) = fs::remove_file(&dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest
        };

        // logging is best effort: the backup itself already succeeded
        if let Ok(pool) = DbPool::new(&cfg.database) {
            let _ = crate::db::log::ttlog(
                &pool.conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(final_path)
    }
}

fn file_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))
}

/// Compress a backup using .zip
#[cfg(target_os = "windows")]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(file_name(path)?, options)
        .map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}

/// Compress a backup using .tar.gz
#[cfg(not(target_os = "windows"))]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let gz_path = PathBuf::from(format!("{}.tar.gz", path.display()));
    let file = fs::File::create(&gz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());

    let mut tar = tar::Builder::new(encoder);
    tar.append_path_with_name(path, file_name(path)?)?;
    tar.into_inner()?.finish()?;

    success(format!("Compressed: {}", gz_path.display()));
    Ok(gz_path)
}
