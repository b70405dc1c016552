//! Text blocks shared by the one-shot commands and the interactive menu.
//! Everything is returned as a `String` so callers choose where it goes.

use crate::core::calculator::earnings::{ShiftEarnings, per_shift_earnings};
use crate::core::wages::WageTable;
use crate::models::role::Role;
use crate::models::shift::Shift;
use crate::models::summary::MonthlySummary;
use crate::utils::table::{Column, Table};
use crate::utils::{money, per_hour, round2};
use std::fmt::Write;

pub fn saved_shift(shift: &Shift, earnings: &ShiftEarnings, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=================== Shift Saved ===================");
    let _ = writeln!(out, "ID: {}", shift.id);
    let _ = writeln!(out, "Date: {}", shift.date_str());
    let _ = writeln!(out, "Role: {}", shift.role);
    let _ = writeln!(out, "Wage Rate: {}/hour", money(shift.wage_rate, currency));
    let _ = writeln!(out, "Tips: {}", money(shift.tips, currency));
    let _ = writeln!(out, "Hours Worked: {}", round2(shift.hours_worked));
    let _ = writeln!(
        out,
        "Total Earnings: {}",
        money(earnings.total_earnings, currency)
    );
    let _ = writeln!(
        out,
        "Earnings Per Hour: {}",
        money(earnings.earnings_per_hour, currency)
    );
    out
}

pub fn monthly_summary(summary: &MonthlySummary, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=================== Monthly Summary ===================");
    let _ = writeln!(out, "Month: {}", summary.month);
    let _ = writeln!(out, "Shifts Logged: {}", summary.shift_count);
    let _ = writeln!(out, "Total Hours: {}", round2(summary.total_hours));
    let _ = writeln!(out, "Total Tips: {}", money(summary.total_tips, currency));
    let _ = writeln!(
        out,
        "Total Earnings: {}",
        money(summary.total_earnings, currency)
    );
    let _ = writeln!(
        out,
        "Average $/hr: {}",
        per_hour(summary.average_per_hour(), currency)
    );
    out
}

/// Ledger-ordered table of shifts with their derived totals.
pub fn shift_table(shifts: &[Shift], currency: &str, separator: char) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("DATE"),
        Column::left("ROLE"),
        Column::right("HOURS"),
        Column::right("TIPS"),
        Column::right("WAGE"),
        Column::right("TOTAL"),
        Column::right("$/HR"),
    ])
    .with_separator(separator);

    for s in shifts {
        let per_hr = per_shift_earnings(s).ok().map(|e| e.earnings_per_hour);
        table.add_row(vec![
            s.id.to_string(),
            s.date_str(),
            s.role.to_string(),
            round2(s.hours_worked),
            money(s.tips, currency),
            money(s.wage_rate, currency),
            money(s.total_earnings(), currency),
            per_hour(per_hr, currency),
        ]);
    }

    table.render()
}

pub fn roles_help(wages: &WageTable, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Roles:");
    for role in Role::ALL {
        let suffix = if role.receives_tips() {
            "+ tips"
        } else {
            "(no tips)"
        };
        let _ = writeln!(
            out,
            "  {:<7}-> {}/hr {}",
            role.code(),
            money(wages.rate_for(role), currency),
            suffix
        );
    }
    out
}
