use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use serde::Serialize;

/// Earnings derived from a single shift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShiftEarnings {
    pub wage_earnings: f64,
    pub total_earnings: f64,
    pub earnings_per_hour: f64,
}

/// wage = hours * rate, total = wage + tips, per hour = total / hours.
///
/// Stored rows always have positive hours; anything else is reported as a
/// `Domain` error instead of producing `inf`/`NaN`.
pub fn per_shift_earnings(shift: &Shift) -> AppResult<ShiftEarnings> {
    let hours = shift.hours_worked;
    if !(hours.is_finite() && hours > 0.0) {
        return Err(AppError::Domain(format!(
            "earnings per hour undefined for shift #{} with {} hours",
            shift.id, hours
        )));
    }

    let wage_earnings = shift.wage_earnings();
    let total_earnings = shift.total_earnings();

    Ok(ShiftEarnings {
        wage_earnings,
        total_earnings,
        earnings_per_hour: total_earnings / hours,
    })
}
