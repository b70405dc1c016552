// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod range;
mod xlsx;

pub use logic::ExportLogic;
pub use model::ShiftExport;
pub use range::parse_range;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
