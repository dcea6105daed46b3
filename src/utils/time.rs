//! Time utilities: fixed-offset handling, timestamp parsing/formatting and
//! hour rendering for the history view.

use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

/// Storage format for UTC timestamps. Fixed width, so SQL range predicates
/// compare lexicographically.
pub const DB_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Display format used by the history/map views.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse an offset like `-05:00`, `+0130`, `Z` or `UTC`.
pub fn parse_utc_offset(s: &str) -> Option<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Calendar date of an instant under the given offset.
pub fn local_date(ts: &DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    ts.with_timezone(offset).date_naive()
}

/// Half-open UTC interval `[start of from, start of day after to)` covering
/// the inclusive local date range.
pub fn day_range_bounds(
    from: NaiveDate,
    to: NaiveDate,
    offset: &FixedOffset,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_midnight(from, offset);
    let end = local_midnight(to + Duration::days(1), offset);
    (start, end)
}

fn local_midnight(date: NaiveDate, offset: &FixedOffset) -> DateTime<Utc> {
    // A fixed offset has no gaps, so this mapping is always single.
    let naive = date.and_time(NaiveTime::MIN);
    (naive - Duration::seconds(offset.local_minus_utc() as i64)).and_utc()
}

/// Accept RFC 3339, or `YYYY-MM-DD HH:MM[:SS]` interpreted in `offset`.
pub fn parse_timestamp(s: &str, offset: &FixedOffset) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt)
            && let Some(dt) = offset.from_local_datetime(&naive).single()
        {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    Err(AppError::InvalidTimestamp(s.to_string()))
}

pub fn to_db_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(DB_TIMESTAMP_FORMAT).to_string()
}

pub fn from_db_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|n| n.and_utc())
}

pub fn format_local(ts: &DateTime<Utc>, offset: &FixedOffset) -> String {
    ts.with_timezone(offset)
        .format(DISPLAY_TIMESTAMP_FORMAT)
        .to_string()
}

/// Duration as fractional hours.
pub fn hours(d: &Duration) -> f64 {
    d.num_milliseconds() as f64 / 3_600_000.0
}

/// `"X.Xh"`; an undefined duration renders as zero hours.
pub fn format_hours(d: Option<&Duration>) -> String {
    format!("{:.1}h", d.map(hours).unwrap_or(0.0))
}
