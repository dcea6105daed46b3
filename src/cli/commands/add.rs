use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewEvent};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;
use crate::utils::time::parse_timestamp;
use chrono::Utc;

/// Record one check-in/check-out event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        employee,
        kind,
        place,
        lat,
        lng,
        at,
    } = cmd
    {
        let offset = cfg.offset()?;

        //
        // 1. Parse kind and timestamp
        //
        let kind = EventKind::parse(kind).ok_or_else(|| AppError::InvalidEventKind(kind.clone()))?;
        let timestamp = match at {
            Some(s) => parse_timestamp(s, &offset)?,
            None => Utc::now(),
        };

        //
        // 2. Validate and store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let ev = AddLogic::apply(
            &mut pool,
            NewEvent {
                employee_id: employee.clone(),
                kind,
                place: place.clone(),
                latitude: *lat,
                longitude: *lng,
                timestamp,
            },
            cfg.geofence.as_ref(),
        )?;

        success(format!(
            "Recorded {} for {} at {} ({})",
            ev.kind.to_db_str(),
            ev.employee_id,
            ev.place,
            ev.local_time_str(&offset)
        ));
    }

    Ok(())
}
