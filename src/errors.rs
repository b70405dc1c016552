//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input validation (caller side)
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid role: {0} (expected server, host or ta)")]
    InvalidRole(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Arithmetic on ledger values
    // ---------------------------
    #[error("Calculation error: {0}")]
    Domain(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Storage failures are the only ones the interactive menu reports as
    /// "could not reach the ledger" instead of a plain input mistake.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Db(_) | AppError::Io(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
