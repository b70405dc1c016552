use crate::cli::commands::summary::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::QueryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, json } = cmd {
        let month = resolve_month(month.as_deref())?;

        let pool = DbPool::open(&cfg.database)?;
        let shifts = QueryLogic::list_month(&pool, month)?;

        if *json {
            let text = serde_json::to_string_pretty(&shifts)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{text}");
            return Ok(());
        }

        if shifts.is_empty() {
            println!("No shifts logged in {}.", month);
            return Ok(());
        }

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        println!("\n=== {} ===", month);
        print!("{}", render::shift_table(&shifts, &cfg.currency_symbol, sep));
    }

    Ok(())
}
