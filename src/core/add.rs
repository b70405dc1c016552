use crate::core::wages::WageTable;
use crate::db::pool::DbPool;
use crate::db::queries::insert_shift;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::shift::{NewShift, Shift};
use crate::utils::date::is_storable;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the raw inputs and build the row to persist.
    ///
    /// The wage is looked up here and frozen on the record; TA tips are
    /// forced to zero whatever was typed.
    pub fn build(
        wages: &WageTable,
        date: NaiveDate,
        role: Role,
        hours_worked: f64,
        tips: Option<f64>,
    ) -> AppResult<NewShift> {
        if !is_storable(&date) {
            return Err(AppError::InvalidDate(date.to_string()));
        }

        if !(hours_worked.is_finite() && hours_worked > 0.0) {
            return Err(AppError::Validation(format!(
                "hours worked must be greater than 0 (got {hours_worked})"
            )));
        }

        let tips = if role.receives_tips() {
            let t = tips.unwrap_or(0.0);
            if !(t.is_finite() && t >= 0.0) {
                return Err(AppError::Validation(format!(
                    "tips cannot be negative (got {t})"
                )));
            }
            t
        } else {
            0.0
        };

        let wage_rate = wages.rate_for(role);
        if !(wage_rate.is_finite() && wage_rate > 0.0) {
            return Err(AppError::Config(format!(
                "no valid wage rate configured for {role}"
            )));
        }

        Ok(NewShift {
            date,
            role,
            hours_worked,
            tips,
            wage_rate,
        })
    }

    /// Validate, persist, and return the stored shift with its new id.
    pub fn apply(
        pool: &DbPool,
        wages: &WageTable,
        date: NaiveDate,
        role: Role,
        hours_worked: f64,
        tips: Option<f64>,
    ) -> AppResult<Shift> {
        let new_shift = Self::build(wages, date, role, hours_worked, tips)?;
        let id = insert_shift(&pool.conn, &new_shift)?;
        Ok(new_shift.with_id(id))
    }
}
