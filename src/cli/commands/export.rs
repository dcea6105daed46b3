use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest, ExportView};
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        view,
        format,
        file,
        employee,
        days,
        as_of,
        date,
        force,
    } = cmd
    {
        let offset = cfg.offset()?;
        let date = match view {
            ExportView::History => resolve_date(as_of.as_ref(), &offset)?,
            ExportView::Map => resolve_date(date.as_ref(), &offset)?,
        };

        let pool = DbPool::new(&cfg.database)?;
        let req = ExportRequest {
            view: *view,
            format: *format,
            file: file.clone(),
            employee: employee.clone(),
            lookback_days: days.unwrap_or(cfg.default_lookback_days),
            date,
            force: *force,
        };

        let rows = ExportLogic::export(&pool, offset, &req)?;
        audit_quiet(
            &pool.conn,
            "export",
            file,
            &format!("{:?} view, {} rows", view, rows),
        );
    }
    Ok(())
}
