#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use geoattend::models::event::Event;
use geoattend::models::event_kind::EventKind;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Meters per degree of latitude on the haversine sphere.
pub const METERS_PER_DEG_LAT: f64 = 6_371_000.0 * std::f64::consts::PI / 180.0;

pub fn gat() -> Command {
    cargo_bin_cmd!("geoattend")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_geoattend.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB and register employees 123 and 456.
pub fn init_db_with_employees(db_path: &str) {
    gat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (id, name) in [("123", "Ana Restrepo"), ("456", "Luis Gomez")] {
        gat()
            .args(["--db", db_path, "--test", "employee", "add", id, name])
            .assert()
            .success();
    }
}

/// Bogota offset used throughout the tests.
pub fn bogota() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

/// Local wall-clock time in Bogota as a UTC instant.
pub fn at(date: &str, hh: u32, mm: u32) -> DateTime<Utc> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    bogota()
        .from_local_datetime(&d.and_hms_opt(hh, mm, 0).unwrap())
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn ev(id: i64, employee: &str, ts: DateTime<Utc>, kind: EventKind, place: &str) -> Event {
    Event::new(employee, ts, kind, place, Some(6.2442), Some(-75.5812)).with_id(id)
}

/// Event at `meters` north of (lat, lon).
pub fn ev_at(id: i64, kind: EventKind, lat: f64, lon: f64, meters_north: f64) -> Event {
    Event::new(
        format!("emp{}", id),
        at("2024-01-10", 8, 0),
        kind,
        "Sede",
        Some(lat + meters_north / METERS_PER_DEG_LAT),
        Some(lon),
    )
    .with_id(id)
}
