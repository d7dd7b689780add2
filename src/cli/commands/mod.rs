pub mod config;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;
pub mod totals;

use crate::config::Config;
use crate::core::store::RecordStore;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;
use rusqlite::Connection;

/// Open the configured database and load today's grid from it.
pub(crate) fn open_store(cfg: &Config) -> AppResult<(DbPool, RecordStore)> {
    let pool = DbPool::new(&cfg.database)?;
    let store = RecordStore::load(&pool.conn, date::today());
    Ok((pool, store))
}

/// Internal log write that never aborts the command.
pub(crate) fn log_op(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}
