use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::shift::{NewShift, Shift};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

fn date_to_db(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn map_row(row: &Row) -> Result<Shift> {
    let date_str: String = row.get("shift_date")?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let role_str: String = row.get("role")?;
    let role = Role::from_db_str(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidRole(role_str.clone())),
        )
    })?;

    Ok(Shift {
        id: row.get("id")?,
        date,
        role,
        hours_worked: row.get("hours_worked")?,
        tips: row.get("tips")?,
        wage_rate: row.get("wage_rate")?,
    })
}

/// Persist a shift and return the id SQLite assigned to it.
pub fn insert_shift(conn: &Connection, shift: &NewShift) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO shifts (shift_date, role, hours_worked, tips, wage_rate)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    stmt.execute(params![
        date_to_db(&shift.date),
        shift.role.to_db_str(),
        shift.hours_worked,
        shift.tips,
        shift.wage_rate,
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Remove every shift logged on `date`. Zero matches is not an error.
pub fn delete_shifts_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM shifts WHERE shift_date = ?1", [date_to_db(date)])?;
    Ok(n)
}

/// All shifts with `start <= date <= end`, by date then insertion order.
pub fn load_shifts_in_range(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, shift_date, role, hours_worked, tips, wage_rate
         FROM shifts
         WHERE shift_date BETWEEN ?1 AND ?2
         ORDER BY shift_date ASC, id ASC",
    )?;

    let rows = stmt.query_map([date_to_db(start), date_to_db(end)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every shift in the ledger, same ordering as the range query.
pub fn load_all_shifts(conn: &Connection) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, shift_date, role, hours_worked, tips, wage_rate
         FROM shifts
         ORDER BY shift_date ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_shifts_by_date(pool: &DbPool, date: &NaiveDate) -> AppResult<Vec<Shift>> {
    load_shifts_in_range(&pool.conn, date, date)
}

pub fn load_log(pool: &DbPool) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
