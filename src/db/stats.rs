use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Raw numbers behind `db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbStats {
    pub file_size: u64,
    pub shift_count: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub total_hours: f64,
}

pub fn collect(pool: &DbPool, db_path: &str) -> rusqlite::Result<DbStats> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    let (shift_count, total_hours): (i64, f64) = pool.conn.query_row(
        "SELECT COUNT(*), IFNULL(SUM(hours_worked), 0.0) FROM shifts",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT shift_date FROM shifts ORDER BY shift_date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT shift_date FROM shifts ORDER BY shift_date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    Ok(DbStats {
        file_size,
        shift_count,
        first_date,
        last_date,
        total_hours,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    let stats = collect(pool, db_path)?;
    let file_mb = (stats.file_size as f64) / (1024.0 * 1024.0);

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Total shifts:{} {}{}{}",
        CYAN, RESET, GREEN, stats.shift_count, RESET
    );
    println!("{}• Total hours:{} {:.2}", CYAN, RESET, stats.total_hours);

    let none = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", stats.first_date.as_deref().unwrap_or(&none));
    println!("    to:   {}", stats.last_date.as_deref().unwrap_or(&none));
    println!();

    Ok(())
}
