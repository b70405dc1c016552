use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Ledger dates are stored as `YYYY-MM-DD` text, which only sorts
/// correctly for four-digit, unsigned years.
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn is_storable(date: &NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year())
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .filter(is_storable)
}

/// `YYYY-MM-DD`, or today when the input is missing or blank.
pub fn parse_date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s.map(str::trim) {
        None | Some("") => Ok(today()),
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
    }
}
