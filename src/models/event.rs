use super::event_kind::EventKind;
use crate::errors::{AppError, AppResult};
use crate::utils::geo::GeoPoint;
use crate::utils::time;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

/// One check-in/check-out record as supplied by the event store.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub id: i64,                    // ⇔ events.id
    pub employee_id: String,        // ⇔ events.employee_id
    pub timestamp: DateTime<Utc>,   // ⇔ events.recorded_at (UTC text)
    pub kind: EventKind,            // ⇔ events.kind ('entrada' | 'salida')
    pub place: String,              // ⇔ events.place
    pub latitude: Option<f64>,      // ⇔ events.latitude (raw text, parsed leniently)
    pub longitude: Option<f64>,     // ⇔ events.longitude
}

impl Event {
    /// Event not yet persisted (`id = 0`).
    pub fn new(
        employee_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        kind: EventKind,
        place: impl Into<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: 0,
            employee_id: employee_id.into(),
            timestamp,
            kind,
            place: place.into(),
            latitude,
            longitude,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Coordinates, when both are present and finite.
    pub fn position(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }

    /// Coordinates of this one record, or a data-quality error naming it.
    pub fn require_position(&self) -> AppResult<GeoPoint> {
        self.position().ok_or_else(|| {
            AppError::DataQuality(format!(
                "event {} of '{}' has unusable coordinates ({:?}, {:?})",
                self.id, self.employee_id, self.latitude, self.longitude
            ))
        })
    }

    pub fn local_date(&self, offset: &FixedOffset) -> NaiveDate {
        time::local_date(&self.timestamp, offset)
    }

    pub fn local_time_str(&self, offset: &FixedOffset) -> String {
        time::format_local(&self.timestamp, offset)
    }
}
