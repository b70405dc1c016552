use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}: run `tiplog init` first.",
                    path.display()
                ));
                return Ok(());
            }

            let used = ConfigLogic::edit(&path, editor.as_deref())?;
            success(format!("Configuration file edited using '{}'", used));

            // reject an edit that leaves an unusable file
            Config::load_from(&path)?;
            println!("{}", ConfigLogic::read(&path)?);
        }
    }

    Ok(())
}
