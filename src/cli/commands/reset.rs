use crate::cli::commands::{log_op, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_yes_no;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { force } = cmd {
        if !*force && !ask_yes_no("This clears every row of the grid.")? {
            info("Reset cancelled.");
            return Ok(());
        }

        let (pool, mut store) = open_store(cfg)?;
        store.reset();
        store.save(&pool.conn);

        log_op(&pool.conn, "reset", "grid", "All rows cleared");
        success("Grid reset: all rows are empty.");
    }
    Ok(())
}
