use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_shifts_by_date;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        force,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let pool = DbPool::open(&cfg.database)?;

        let existing = load_shifts_by_date(&pool, &d)?;
        if existing.is_empty() {
            info(format!("No shifts found on {}.", d));
            return Ok(());
        }

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete {} shift(s) logged on {}? This action is irreversible.",
            existing.len(),
            d
        );
        if !*force && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let deleted = DeleteLogic::apply(&pool, d)?;
        audit(
            &pool.conn,
            "del",
            &d.to_string(),
            &format!("Deleted {deleted} shift(s)"),
        );

        if deleted > 0 {
            success(format!("Deleted {} shift(s) on {}.", deleted, d));
        } else {
            info(format!("No shifts found on {}.", d));
        }
    }

    Ok(())
}
