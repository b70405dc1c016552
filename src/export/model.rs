// src/export/model.rs

use crate::models::shift::Shift;
use serde::Serialize;

/// Flat row written by every export format.
///
/// Money columns keep full precision; the spreadsheet applies a two-decimal
/// number format instead of rounding the value.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShiftExport {
    pub id: i64,
    pub date: String,
    pub role: String,
    pub hours_worked: f64,
    pub tips: f64,
    pub wage_rate: f64,
    pub wage_earnings: f64,
    pub total_earnings: f64,
}

impl From<&Shift> for ShiftExport {
    fn from(s: &Shift) -> Self {
        Self {
            id: s.id,
            date: s.date_str(),
            role: s.role.code().to_string(),
            hours_worked: s.hours_worked,
            tips: s.tips,
            wage_rate: s.wage_rate,
            wage_earnings: s.wage_earnings(),
            total_earnings: s.total_earnings(),
        }
    }
}

/// Header for XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "role",
        "hours_worked",
        "tips",
        "wage_rate",
        "wage_earnings",
        "total_earnings",
    ]
}
