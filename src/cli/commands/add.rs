use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::calculator::earnings::per_shift_earnings;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::ui::render;
use crate::utils::date;
use crate::utils::number::{parse_hours, parse_tips};

/// Log a new shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        role,
        hours,
        tips,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = date::parse_date_or_today(date.as_deref())?;

        //
        // 2. Parse role (default from config)
        //
        let role = match role {
            Some(code) => {
                Role::from_code(code).ok_or_else(|| AppError::InvalidRole(code.clone()))?
            }
            None => cfg.default_role(),
        };

        //
        // 3. Parse numbers
        //
        let hours = parse_hours(hours)?;
        let tips = tips.as_deref().map(parse_tips).transpose()?;

        if !role.receives_tips() && tips.is_some_and(|t| t > 0.0) {
            crate::ui::messages::warning("TA shifts do not receive tips: tips set to 0.");
        }

        //
        // 4. Open DB and persist
        //
        let pool = DbPool::open(&cfg.database)?;
        let shift = AddLogic::apply(&pool, &cfg.wages, d, role, hours, tips)?;
        let earnings = per_shift_earnings(&shift)?;

        audit(
            &pool.conn,
            "add",
            &shift.date_str(),
            &format!(
                "Logged {} shift #{} ({} h)",
                shift.role, shift.id, shift.hours_worked
            ),
        );

        print!(
            "{}",
            render::saved_shift(&shift, &earnings, &cfg.currency_symbol)
        );
    }

    Ok(())
}
