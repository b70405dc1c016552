use crate::db::pool::DbPool;
use crate::db::queries::delete_shifts_by_date;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete every shift logged on `date`; returns how many went away.
    pub fn apply(pool: &DbPool, date: NaiveDate) -> AppResult<usize> {
        delete_shifts_by_date(&pool.conn, &date)
    }
}
