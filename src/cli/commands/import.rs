use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let offset = cfg.offset()?;
        let mut pool = DbPool::new(&cfg.database)?;

        let report = ImportLogic::from_path(&mut pool, file, &offset)?;

        success(format!(
            "Imported {} events ({} skipped)",
            report.inserted, report.skipped
        ));
        if report.bad_coordinates > 0 {
            warning(format!(
                "{} imported events have unusable coordinates and will not appear on the map",
                report.bad_coordinates
            ));
        }
    }
    Ok(())
}
