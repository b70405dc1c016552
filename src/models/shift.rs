use super::role::Role;
use chrono::NaiveDate;
use serde::Serialize;

/// A shift ready to be written to the ledger (no id yet).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewShift {
    pub date: NaiveDate,   // ⇔ shifts.shift_date (TEXT "YYYY-MM-DD")
    pub role: Role,        // ⇔ shifts.role ('SERVER','HOST','TA')
    pub hours_worked: f64, // ⇔ shifts.hours_worked (REAL > 0)
    pub tips: f64,         // ⇔ shifts.tips (REAL >= 0)
    pub wage_rate: f64,    // ⇔ shifts.wage_rate (REAL, frozen at insert)
}

/// One stored row of the `shifts` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shift {
    pub id: i64,
    pub date: NaiveDate,
    pub role: Role,
    pub hours_worked: f64,
    pub tips: f64,
    pub wage_rate: f64,
}

impl NewShift {
    pub fn with_id(self, id: i64) -> Shift {
        Shift {
            id,
            date: self.date,
            role: self.role,
            hours_worked: self.hours_worked,
            tips: self.tips,
            wage_rate: self.wage_rate,
        }
    }
}

impl Shift {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn wage_earnings(&self) -> f64 {
        self.hours_worked * self.wage_rate
    }

    /// Always derived from the stored fields, never persisted.
    pub fn total_earnings(&self) -> f64 {
        self.tips + self.wage_earnings()
    }
}
