use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::query::QueryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::year_month::YearMonth;
use crate::ui::render;

/// `YYYY-MM`, or the current month when omitted.
pub(crate) fn resolve_month(month: Option<&str>) -> AppResult<YearMonth> {
    match month {
        Some(m) => m.parse(),
        None => Ok(YearMonth::current()),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month, json } = cmd {
        let month = resolve_month(month.as_deref())?;

        let pool = DbPool::open(&cfg.database)?;
        let summary = QueryLogic::monthly_summary(&pool, month)?;

        if *json {
            let value = serde_json::json!({
                "month": summary.month,
                "shift_count": summary.shift_count,
                "total_hours": summary.total_hours,
                "total_tips": summary.total_tips,
                "total_earnings": summary.total_earnings,
                "average_per_hour": summary.average_per_hour(),
            });
            let text = serde_json::to_string_pretty(&value)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{text}");
        } else {
            print!("{}", render::monthly_summary(&summary, &cfg.currency_symbol));
        }
    }

    Ok(())
}
