use crate::models::shift::Shift;
use crate::models::summary::MonthlySummary;
use crate::models::year_month::YearMonth;

/// Roll a month's shifts up into totals. An empty slice yields zeros.
pub fn summarize(month: YearMonth, shifts: &[Shift]) -> MonthlySummary {
    shifts
        .iter()
        .fold(MonthlySummary::empty(month), |mut acc, s| {
            acc.shift_count += 1;
            acc.total_hours += s.hours_worked;
            acc.total_tips += s.tips;
            acc.total_earnings += s.total_earnings();
            acc
        })
}
