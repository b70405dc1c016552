//! Parsing of the numeric inputs typed by the user (hours, tips).

use crate::errors::{AppError, AppResult};

/// Accepts `12`, `12.5`, `$12.50`, `1,200.00`.
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_hours(s: &str) -> AppResult<f64> {
    match parse_amount(s) {
        Some(h) if h > 0.0 => Ok(h),
        _ => Err(AppError::Validation(format!(
            "hours worked must be a number greater than 0 (got '{}')",
            s.trim()
        ))),
    }
}

pub fn parse_tips(s: &str) -> AppResult<f64> {
    match parse_amount(s) {
        Some(t) if t >= 0.0 => Ok(t),
        _ => Err(AppError::Validation(format!(
            "tips must be a number of 0 or more (got '{}')",
            s.trim()
        ))),
    }
}
