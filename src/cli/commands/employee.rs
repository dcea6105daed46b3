use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::employee::EmployeeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EmployeeAction::Add { id, name } => {
                let emp = EmployeeLogic::add(&mut pool, id, name)?;
                success(format!("Employee {} ({}) registered", emp.id, emp.name));
            }
            EmployeeAction::List => {
                let employees = EmployeeLogic::list(&pool)?;
                if employees.is_empty() {
                    warning("No employees registered.");
                    return Ok(());
                }

                let mut table = Table::new(["ID", "NAME", "ACTIVE"]);
                for e in employees {
                    table.add_row(vec![
                        e.id,
                        e.name,
                        if e.active { "yes" } else { "no" }.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
