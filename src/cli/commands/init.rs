use crate::cli::commands::log_op;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::RecordStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
///  - an empty grid for today, unless one is already stored
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing taskgrid…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;

    let store = RecordStore::load(&pool.conn, date::today());
    store.save(&pool.conn);

    println!("✅ Database initialized at {}", &db_path);

    log_op(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 taskgrid initialization completed!");
    Ok(())
}
