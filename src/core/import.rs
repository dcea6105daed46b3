//! Bulk CSV import with a skip-bad-row policy.
//!
//! Expected header: `employee_id,kind,place,latitude,longitude,timestamp`.
//! Coordinates are stored as received; malformed values surface later as
//! events the clusterer excludes.

use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{employee_exists, insert_event_raw};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::utils::geo::parse_coordinate;
use crate::utils::time::parse_timestamp;
use chrono::FixedOffset;
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct ImportRow {
    employee_id: String,
    kind: String,
    #[serde(default)]
    place: String,
    #[serde(default)]
    latitude: Option<String>,
    #[serde(default)]
    longitude: Option<String>,
    timestamp: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub inserted: usize,
    pub skipped: usize,
    /// Inserted rows whose coordinates will not be usable on the map.
    pub bad_coordinates: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn from_path(pool: &mut DbPool, path: &str, offset: &FixedOffset) -> AppResult<ImportReport> {
        let file = std::fs::File::open(path)?;
        let report = Self::from_reader(pool, file, offset)?;
        audit_quiet(
            &pool.conn,
            "import",
            path,
            &format!("inserted={} skipped={}", report.inserted, report.skipped),
        );
        Ok(report)
    }

    /// Import all rows in one transaction.
    pub fn from_reader<R: Read>(
        pool: &mut DbPool,
        reader: R,
        offset: &FixedOffset,
    ) -> AppResult<ImportReport> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut report = ImportReport::default();

            for (idx, record) in rdr.deserialize::<ImportRow>().enumerate() {
                let line = idx + 2; // header is line 1

                let row = match record {
                    Ok(r) => r,
                    Err(e) => {
                        warn!(line, error = %e, "skipping unreadable row");
                        report.skipped += 1;
                        continue;
                    }
                };

                let event = match Self::to_event(&tx, &row, offset) {
                    Ok(ev) => ev,
                    Err(e) => {
                        warn!(line, error = %e, "skipping row");
                        report.skipped += 1;
                        continue;
                    }
                };

                if let Err(e) = event.require_position() {
                    warn!(line, error = %e, "row stored without usable coordinates");
                    report.bad_coordinates += 1;
                }

                insert_event_raw(&tx, &event, row.latitude.clone(), row.longitude.clone(), "import")?;
                report.inserted += 1;
            }

            tx.commit()?;
            Ok(report)
        })
    }

    fn to_event(
        conn: &rusqlite::Connection,
        row: &ImportRow,
        offset: &FixedOffset,
    ) -> AppResult<Event> {
        let kind = EventKind::parse(&row.kind)
            .ok_or_else(|| AppError::InvalidEventKind(row.kind.clone()))?;
        let timestamp = parse_timestamp(&row.timestamp, offset)?;

        if !employee_exists(conn, &row.employee_id)? {
            return Err(AppError::NotFound(format!("employee '{}'", row.employee_id)));
        }

        Ok(Event::new(
            row.employee_id.clone(),
            timestamp,
            kind,
            row.place.clone(),
            row.latitude.as_deref().and_then(parse_coordinate),
            row.longitude.as_deref().and_then(parse_coordinate),
        ))
    }
}
