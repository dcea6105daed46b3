//! Loads events through the store and runs the analytics engine for the
//! history, map and statistics views.

use crate::core::analytics::{ProximityClusterer, SessionReconstructor, daily_stats};
use crate::db::pool::DbPool;
use crate::db::store::{EventStore, SqliteEventStore};
use crate::errors::AppResult;
use crate::models::cluster::Cluster;
use crate::models::daily_stats::DailyStats;
use crate::models::session_summary::DailySessionSummary;
use chrono::{FixedOffset, NaiveDate};

pub struct ViewLogic;

impl ViewLogic {
    pub fn history(
        pool: &DbPool,
        offset: FixedOffset,
        employee_id: &str,
        lookback_days: i64,
        as_of: NaiveDate,
    ) -> AppResult<Vec<DailySessionSummary>> {
        let store = SqliteEventStore::new(pool, offset);
        SessionReconstructor::new(&store, offset).reconstruct(employee_id, lookback_days, as_of)
    }

    pub fn map(pool: &DbPool, offset: FixedOffset, date: NaiveDate) -> AppResult<Vec<Cluster>> {
        let store = SqliteEventStore::new(pool, offset);
        let events = store.events_for_snapshot(date)?;
        Ok(ProximityClusterer::cluster(&events))
    }

    pub fn stats(pool: &DbPool, offset: FixedOffset, date: NaiveDate) -> AppResult<DailyStats> {
        let store = SqliteEventStore::new(pool, offset);
        let events = store.events_for_snapshot(date)?;
        Ok(daily_stats(date, &events, &offset))
    }
}
