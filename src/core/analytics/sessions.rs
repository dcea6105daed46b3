//! Daily session reconstruction for the history panel.
//!
//! Events are bucketed by calendar date under one fixed offset; each bucket
//! becomes a [`DailySessionSummary`]. The worked duration is a first-in /
//! last-out span: several shifts on one day collapse into a single span.

use super::{COMPLETE_SHIFT_HOURS, LOOKBACK_DAYS};
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::session_summary::{DailySessionSummary, SessionStatus};
use crate::utils::date::lookback_window;
use chrono::{Duration, FixedOffset, NaiveDate};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

pub struct SessionReconstructor<'a, S: EventStore + ?Sized> {
    store: &'a S,
    offset: FixedOffset,
}

impl<'a, S: EventStore + ?Sized> SessionReconstructor<'a, S> {
    pub fn new(store: &'a S, offset: FixedOffset) -> Self {
        Self { store, offset }
    }

    /// Summaries for every date with at least one event in
    /// `[today - lookback_days, today]`, newest date first.
    pub fn reconstruct(
        &self,
        employee_id: &str,
        lookback_days: i64,
        today: NaiveDate,
    ) -> AppResult<Vec<DailySessionSummary>> {
        validate_lookback(lookback_days)?;

        if !self.store.employee_exists(employee_id)? {
            return Err(AppError::NotFound(format!("employee '{}'", employee_id)));
        }

        let (from, to) = lookback_window(today, lookback_days);
        let events = self.store.events_for_employee(employee_id, from, to)?;

        debug!(
            employee = employee_id,
            %from,
            %to,
            events = events.len(),
            "reconstructing daily sessions"
        );

        Ok(summarize_days(employee_id, &events, &self.offset))
    }
}

pub fn validate_lookback(days: i64) -> AppResult<()> {
    let min = *LOOKBACK_DAYS.start() as i64;
    let max = *LOOKBACK_DAYS.end() as i64;

    if days < min || days > max {
        return Err(AppError::InvalidArgument(format!(
            "lookback days must be between {} and {} (got {})",
            min, max, days
        )));
    }
    Ok(())
}

/// Bucket `events` by local date and summarize each bucket, newest first.
/// Every event lands in exactly one bucket.
pub fn summarize_days(
    employee_id: &str,
    events: &[Event],
    offset: &FixedOffset,
) -> Vec<DailySessionSummary> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for ev in events {
        buckets.entry(ev.local_date(offset)).or_default().push(ev);
    }

    buckets
        .into_iter()
        .rev()
        .filter_map(|(date, evs)| summarize_day(employee_id, date, evs))
        .collect()
}

/// Summary of one date's events. `None` only for an empty bucket.
pub fn summarize_day(
    employee_id: &str,
    date: NaiveDate,
    mut events: Vec<&Event>,
) -> Option<DailySessionSummary> {
    // Stable: same-instant events keep their supplied order.
    events.sort_by_key(|e| e.timestamp);

    let first_event = events.first()?.timestamp;
    let last_event = events.last()?.timestamp;

    let first_in = events
        .iter()
        .filter(|e| e.kind.is_check_in())
        .map(|e| e.timestamp)
        .min();
    let last_out = events
        .iter()
        .filter(|e| e.kind.is_check_out())
        .map(|e| e.timestamp)
        .max();

    let check_in_count = events.iter().filter(|e| e.kind.is_check_in()).count();
    let check_out_count = events.len() - check_in_count;

    let worked_duration = match (first_in, last_out) {
        (Some(start), Some(end)) if check_in_count == check_out_count => Some(end - start),
        _ => None,
    };

    Some(DailySessionSummary {
        employee_id: employee_id.to_string(),
        date,
        check_in_count,
        check_out_count,
        worked_duration,
        visited_places: visited_places(&events),
        first_event,
        last_event,
        status: classify(check_in_count, check_out_count, worked_duration),
    })
}

/// `Complete`/`Partial` need matching nonzero counts; anything else is `Incomplete`.
pub fn classify(
    check_in_count: usize,
    check_out_count: usize,
    worked: Option<Duration>,
) -> SessionStatus {
    if check_in_count != check_out_count || check_in_count == 0 {
        return SessionStatus::Incomplete;
    }

    match worked {
        Some(d) if d >= complete_shift_threshold() => SessionStatus::Complete,
        _ => SessionStatus::Partial,
    }
}

pub fn complete_shift_threshold() -> Duration {
    Duration::hours(COMPLETE_SHIFT_HOURS)
}

/// Distinct non-empty places in first-occurrence order; `events` must
/// already be sorted.
fn visited_places(events: &[&Event]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    for ev in events {
        if !ev.place.is_empty() && seen.insert(ev.place.as_str()) {
            out.push(ev.place.clone());
        }
    }
    out
}
