use super::year_month::YearMonth;
use serde::Serialize;

/// Monthly roll-up of the ledger. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub shift_count: usize,
    pub total_hours: f64,
    pub total_tips: f64,
    pub total_earnings: f64,
}

impl MonthlySummary {
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            shift_count: 0,
            total_hours: 0.0,
            total_tips: 0.0,
            total_earnings: 0.0,
        }
    }

    /// Average $/hour over the month, `None` when no hours were logged.
    pub fn average_per_hour(&self) -> Option<f64> {
        if self.total_hours > 0.0 {
            Some(self.total_earnings / self.total_hours)
        } else {
            None
        }
    }
}
