// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{load_all_shifts, load_shifts_in_range};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ShiftExport;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export shifts to `file`.
    ///
    /// - `range`: `None`, `"all"` or one of the shapes accepted by
    ///   [`parse_range`]
    /// - `file`: absolute path (`~/` is expanded)
    ///
    /// Returns the written path and the number of exported shifts.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<(PathBuf, usize)> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let shifts = match range {
            None => load_all_shifts(&pool.conn)?,
            Some(r) if r.trim().eq_ignore_ascii_case("all") => load_all_shifts(&pool.conn)?,
            Some(r) => {
                let (start, end) = parse_range(r)?;
                load_shifts_in_range(&pool.conn, &start, &end)?
            }
        };

        ensure_writable(&path, force)?;

        let rows: Vec<ShiftExport> = shifts.iter().map(ShiftExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok((path, rows.len()))
    }
}
