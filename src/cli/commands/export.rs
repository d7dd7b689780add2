use crate::cli::commands::{log_op, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = expand_tilde(file.as_deref().unwrap_or(&cfg.export_file));
        let format = format.unwrap_or_else(|| ExportFormat::from_path(&path));

        let (pool, store) = open_store(cfg)?;
        let written = ExportLogic::export(store.records(), format, &path, *force)?;

        if written > 0 {
            log_op(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{written} tasks exported to {}", path.display()),
            );
        }
    }
    Ok(())
}
