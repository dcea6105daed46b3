use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{employee_exists, insert_event};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::utils::geo::{BoundingBox, GeoPoint};
use chrono::{DateTime, Utc};
use tracing::info;

pub const MAX_PLACE_LEN: usize = 255;

/// Validated input for a single GPS check-in/check-out.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub employee_id: String,
    pub kind: EventKind,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut DbPool,
        input: NewEvent,
        geofence: Option<&BoundingBox>,
    ) -> AppResult<Event> {
        let place = input.place.trim();
        if place.is_empty() || place.chars().count() > MAX_PLACE_LEN {
            return Err(AppError::InvalidArgument(format!(
                "place must be 1..={} characters",
                MAX_PLACE_LEN
            )));
        }

        let point = Self::validate_coordinates(input.latitude, input.longitude, geofence)?;

        if !employee_exists(&pool.conn, &input.employee_id)? {
            return Err(AppError::NotFound(format!("employee '{}'", input.employee_id)));
        }

        let ev = Event::new(
            input.employee_id,
            input.timestamp,
            input.kind,
            place,
            Some(point.lat),
            Some(point.lon),
        );

        let id = insert_event(&pool.conn, &ev, "cli")?;
        let ev = ev.with_id(id);

        info!(id, employee = %ev.employee_id, kind = ev.kind.to_db_str(), "event recorded");
        audit_quiet(
            &pool.conn,
            "add",
            &ev.employee_id,
            &format!("{} at {} ({}, {})", ev.kind.to_db_str(), ev.place, point.lat, point.lon),
        );

        Ok(ev)
    }

    pub fn validate_coordinates(
        lat: f64,
        lon: f64,
        geofence: Option<&BoundingBox>,
    ) -> AppResult<GeoPoint> {
        let point = GeoPoint::from_parts(Some(lat), Some(lon))
            .filter(GeoPoint::is_within_earth_bounds)
            .ok_or_else(|| AppError::InvalidCoordinates(format!("{}, {}", lat, lon)))?;

        if let Some(fence) = geofence
            && !fence.contains(&point)
        {
            return Err(AppError::InvalidCoordinates(format!(
                "{}, {} is outside the configured geofence",
                lat, lon
            )));
        }

        Ok(point)
    }
}
