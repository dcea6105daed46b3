use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{BLUE, GREEN, RESET, YELLOW, paint};
use crate::utils::formatting::truncate;
use crate::utils::table::Table;

/// Color for an operation name in the log listing.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" | "employee_add" => GREEN,
        "import" | "export" => BLUE,
        "migration_applied" | "init" => YELLOW,
        _ => RESET,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            warning("Internal log is empty.");
            return Ok(());
        }

        header("Internal log");
        let mut table = Table::new(["ID", "DATE", "OPERATION", "MESSAGE"]);
        for e in entries {
            let op = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            table.add_row(vec![
                e.id.to_string(),
                e.date,
                paint(&truncate(&op, 60), color_for_operation(&e.operation)),
                truncate(&e.message, 80),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
