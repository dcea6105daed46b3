use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{find_employee, insert_employee, list_employees};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;

pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn add(pool: &mut DbPool, id: &str, name: &str) -> AppResult<Employee> {
        let id = id.trim();
        let name = name.trim();

        if id.is_empty() {
            return Err(AppError::InvalidArgument("employee id is required".into()));
        }
        if name.is_empty() {
            return Err(AppError::InvalidArgument("employee name is required".into()));
        }
        if find_employee(&pool.conn, id)?.is_some() {
            return Err(AppError::InvalidArgument(format!(
                "employee '{}' already exists",
                id
            )));
        }

        insert_employee(&pool.conn, id, name)?;
        audit_quiet(&pool.conn, "employee_add", id, name);

        find_employee(&pool.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("employee '{}'", id)))
    }

    pub fn list(pool: &DbPool) -> AppResult<Vec<Employee>> {
        list_employees(&pool.conn)
    }
}
