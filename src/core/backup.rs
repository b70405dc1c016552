use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest`, optionally replacing the copy with
    /// a `.zip` archive. Returns the path of the final artifact.
    ///
    /// The caller is responsible for confirming an overwrite.
    pub fn backup(db_path: &str, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        let src = Path::new(db_path);

        if !src.exists() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest)?;

        if !compress {
            return Ok(dest.to_path_buf());
        }

        let compressed = compress_backup(dest)?;
        if compressed != dest {
            fs::remove_file(dest)?;
        }
        Ok(compressed)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    // never overwrite the file we are about to read
    let zip_path = if path.extension().is_some_and(|e| e == "zip") {
        path.with_extension("sqlite.zip")
    } else {
        path.with_extension("zip")
    };
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path)
}
