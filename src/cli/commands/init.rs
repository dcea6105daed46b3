use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database file
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing geoattend…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", db_path));

    let conn = Connection::open(&db_path)?;
    let applied = init_db(&conn)?;

    log::audit_quiet(
        &conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path),
    );

    success(format!(
        "Database initialized at {} ({} migrations applied)",
        db_path,
        applied.len()
    ));
    Ok(())
}
