use crate::cli::commands::{log_op, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::import::ImportLogic;
use crate::models::task::NUM_TASK_ROWS;
use crate::ui::messages::{success, warning};
use crate::utils::{date, path::expand_tilde};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let (pool, mut store) = open_store(cfg)?;

        // on failure the stored grid is left exactly as it was
        let tasks = ImportLogic::import(&path, date::today())?;

        let count = tasks.len();
        store.replace_all(tasks);
        store.save(&pool.conn);

        log_op(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!("{count} tasks imported"),
        );

        success(format!("{count} tasks imported successfully!"));
        if count > NUM_TASK_ROWS {
            warning(format!(
                "Only the first {NUM_TASK_ROWS} tasks fit in the grid; {} were dropped.",
                count - NUM_TASK_ROWS
            ));
        }
    }
    Ok(())
}
