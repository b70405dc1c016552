// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::year_month::YearMonth;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Parse `--range` into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let raw = r.trim();

    let (start, end) = match raw.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(invalid(raw, "start and end must have the same format"));
            }
            (bounds(s)?.0, bounds(e)?.1)
        }
        None => bounds(raw)?,
    };

    if start > end {
        return Err(invalid(raw, "start is after end"));
    }
    Ok((start, end))
}

/// First and last day covered by a single period token.
fn bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let ym = YearMonth::new(y, 1).map_err(|_| invalid(p, "invalid year"))?;
            let dec = YearMonth::new(y, 12).map_err(|_| invalid(p, "invalid year"))?;
            Ok((ym.first_day(), dec.last_day()))
        }
        // YYYY-MM
        7 => {
            let ym: YearMonth = p.parse()?;
            Ok(ym.bounds())
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported range format")),
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::Validation(format!("range '{r}': {why}"))
}
