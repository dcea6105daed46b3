use crate::db::migrate::{applied_migrations, run_pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Schema creation and upgrades are delegated to the migration engine;
/// returns the ids of all applied migrations.
pub fn init_db(conn: &Connection) -> AppResult<Vec<String>> {
    run_pending_migrations(conn)?;
    applied_migrations(conn)
}
