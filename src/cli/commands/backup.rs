use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let dest = expand_tilde(file);

        if dest.exists()
            && !*force
            && !confirm(&format!("The file '{}' already exists. Overwrite?", dest.display()))
        {
            info("Backup cancelled.");
            return Ok(());
        }

        let final_path = BackupLogic::backup(&cfg.database, &dest, *compress)?;
        success(format!("Backup created: {}", final_path.display()));

        let pool = DbPool::open(&cfg.database)?;
        audit(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if *compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );
    }

    Ok(())
}
