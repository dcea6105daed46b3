use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::utils::geo::parse_coordinate;
use crate::utils::time::{from_db_timestamp, to_db_timestamp};
use chrono::{DateTime, Local, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EVENT_COLUMNS: &str =
    "id, employee_id, kind, place, latitude, longitude, recorded_at";

pub fn map_row(row: &Row) -> Result<Event> {
    let ts_str: String = row.get("recorded_at")?;
    let timestamp = from_db_timestamp(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventKind(kind_str.clone())),
        )
    })?;

    // Coordinates are kept lenient: a bad value becomes None instead of
    // failing the whole query.
    let lat_raw: Option<String> = row.get("latitude")?;
    let lon_raw: Option<String> = row.get("longitude")?;

    Ok(Event {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        timestamp,
        kind,
        place: row.get("place")?,
        latitude: lat_raw.as_deref().and_then(parse_coordinate),
        longitude: lon_raw.as_deref().and_then(parse_coordinate),
    })
}

/// Insert an event with coordinates taken from the model.
pub fn insert_event(conn: &Connection, ev: &Event, source: &str) -> AppResult<i64> {
    insert_event_raw(
        conn,
        ev,
        ev.latitude.map(|v| v.to_string()),
        ev.longitude.map(|v| v.to_string()),
        source,
    )
}

/// Insert an event storing the coordinates exactly as received.
pub fn insert_event_raw(
    conn: &Connection,
    ev: &Event,
    latitude: Option<String>,
    longitude: Option<String>,
    source: &str,
) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO events (employee_id, kind, place, latitude, longitude, recorded_at, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    stmt.execute(params![
        ev.employee_id,
        ev.kind.to_db_str(),
        ev.place,
        latitude,
        longitude,
        to_db_timestamp(&ev.timestamp),
        source,
        Local::now().to_rfc3339(),
    ])?;
    Ok(conn.last_insert_rowid())
}

/// Events in the half-open UTC interval `[start, end)`, optionally for one
/// employee, ordered by timestamp then id.
pub fn load_events_between(
    conn: &Connection,
    employee_id: Option<&str>,
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> AppResult<Vec<Event>> {
    let start = to_db_timestamp(start);
    let end = to_db_timestamp(end);

    let mut out = Vec::new();

    match employee_id {
        Some(emp) => {
            let sql = format!(
                "SELECT {EVENT_COLUMNS} FROM events
                 WHERE employee_id = ?1 AND recorded_at >= ?2 AND recorded_at < ?3
                 ORDER BY recorded_at ASC, id ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            for r in stmt.query_map(params![emp, start, end], map_row)? {
                out.push(r?);
            }
        }
        None => {
            let sql = format!(
                "SELECT {EVENT_COLUMNS} FROM events
                 WHERE recorded_at >= ?1 AND recorded_at < ?2
                 ORDER BY recorded_at ASC, id ASC"
            );
            let mut stmt = conn.prepare(&sql)?;
            for r in stmt.query_map(params![start, end], map_row)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?)
}

// ---------------------------
// Employee directory
// ---------------------------

fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        active: row.get::<_, i32>("active")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_employee(conn: &Connection, id: &str, name: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employees (id, name, active, created_at) VALUES (?1, ?2, 1, ?3)",
        params![id, name, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn find_employee(conn: &Connection, id: &str) -> AppResult<Option<Employee>> {
    let mut stmt =
        conn.prepare_cached("SELECT id, name, active, created_at FROM employees WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_employee).optional()?)
}

pub fn employee_exists(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM employees WHERE id = ?1 LIMIT 1")?;
    Ok(stmt.exists([id])?)
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT id, name, active, created_at FROM employees ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
