use crate::core::calculator::summary::summarize;
use crate::db::pool::DbPool;
use crate::db::queries::load_shifts_in_range;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::models::summary::MonthlySummary;
use crate::models::year_month::YearMonth;

/// Month-level reads over the ledger.
pub struct QueryLogic;

impl QueryLogic {
    pub fn monthly_summary(pool: &DbPool, month: YearMonth) -> AppResult<MonthlySummary> {
        let shifts = Self::list_month(pool, month)?;
        Ok(summarize(month, &shifts))
    }

    /// Shifts of the month ordered by date, then insertion order.
    pub fn list_month(pool: &DbPool, month: YearMonth) -> AppResult<Vec<Shift>> {
        let (first, last) = month.bounds();
        load_shifts_in_range(&pool.conn, &first, &last)
    }
}
