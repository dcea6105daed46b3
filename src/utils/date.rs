use crate::errors::{AppError, AppResult};
use chrono::{Duration, FixedOffset, NaiveDate, Utc};

/// Today's calendar date under the configured offset.
pub fn today(offset: &FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(offset).date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `--date`/`--as-of` argument, defaulting to today.
pub fn resolve_date(input: Option<&String>, offset: &FixedOffset) -> AppResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today(offset)),
    }
}

/// Inclusive window `[today - days, today]`.
pub fn lookback_window(today: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(days), today)
}
