use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `shifts` ledger table and its date index.
///
/// `CHECK` constraints mirror the record rules, so a row that slipped past
/// caller validation is still refused by SQLite.
fn ensure_shifts_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS shifts (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            shift_date    TEXT NOT NULL,
            role          TEXT NOT NULL CHECK(role IN ('SERVER','HOST','TA')),
            hours_worked  REAL NOT NULL CHECK(hours_worked > 0),
            tips          REAL NOT NULL DEFAULT 0 CHECK(tips >= 0),
            wage_rate     REAL NOT NULL CHECK(wage_rate > 0)
        );

        CREATE INDEX IF NOT EXISTS idx_shifts_date_id ON shifts(shift_date, id);
        "#,
    )
}

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Initialize the database.
/// Idempotent: safe on every start, including against a populated ledger.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_shifts_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
