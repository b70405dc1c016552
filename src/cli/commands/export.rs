use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let (path, count) =
            ExportLogic::export(&pool, *format, file, range.as_deref(), *force)?;

        audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {count} shift(s) as {}", format.as_str()),
        );

        success(format!(
            "{} export completed: {} ({} shift(s))",
            format.as_str().to_uppercase(),
            path.display(),
            count
        ));
    }
    Ok(())
}
