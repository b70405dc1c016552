use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::menu::Menu;
use std::io;

/// Run the interactive menu on stdin/stdout until exit or EOF.
pub fn handle(cfg: &Config) -> AppResult<()> {
    // a schema failure here ends the session before the first prompt
    let pool = DbPool::open(&cfg.database)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(&pool, cfg, stdin.lock(), stdout.lock());
    menu.run()
}
