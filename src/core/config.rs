use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn read(path: &Path) -> AppResult<String> {
        fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))
    }

    /// Editor chosen from `--editor`, then `$EDITOR`/`$VISUAL`, then the
    /// platform default.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in the requested editor, falling back to the default one.
    /// Returns the editor that succeeded.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<String> {
        let fallback = Self::default_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| fallback.clone());

        if matches!(Command::new(&requested).arg(path).status(), Ok(s) if s.success()) {
            return Ok(requested);
        }

        if requested != fallback
            && matches!(Command::new(&fallback).arg(path).status(), Ok(s) if s.success())
        {
            return Ok(fallback);
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{}'",
            path.display(),
            requested
        )))
    }
}
