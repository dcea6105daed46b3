//! Event store: the read side consumed by the analytics engine.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::utils::time::day_range_bounds;
use chrono::{FixedOffset, NaiveDate};
use std::collections::HashSet;

/// Supplies ordered events to the analytics engine.
///
/// Dates are calendar dates under the store's offset, both bounds inclusive.
/// Results are ordered by timestamp ascending, ties broken by id, so repeated
/// snapshot reads feed the clusterer the same order.
pub trait EventStore {
    fn employee_exists(&self, employee_id: &str) -> AppResult<bool>;

    fn events_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Event>>;

    fn events_for_snapshot(&self, date: NaiveDate) -> AppResult<Vec<Event>>;
}

pub struct SqliteEventStore<'a> {
    pool: &'a DbPool,
    offset: FixedOffset,
}

impl<'a> SqliteEventStore<'a> {
    pub fn new(pool: &'a DbPool, offset: FixedOffset) -> Self {
        Self { pool, offset }
    }
}

impl EventStore for SqliteEventStore<'_> {
    fn employee_exists(&self, employee_id: &str) -> AppResult<bool> {
        queries::employee_exists(&self.pool.conn, employee_id)
    }

    fn events_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Event>> {
        let (start, end) = day_range_bounds(from, to, &self.offset);
        queries::load_events_between(&self.pool.conn, Some(employee_id), &start, &end)
    }

    fn events_for_snapshot(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        let (start, end) = day_range_bounds(date, date, &self.offset);
        queries::load_events_between(&self.pool.conn, None, &start, &end)
    }
}

/// In-memory store for library callers that already hold their events.
#[derive(Debug, Clone)]
pub struct MemoryEventStore {
    offset: FixedOffset,
    employees: HashSet<String>,
    events: Vec<Event>,
}

impl MemoryEventStore {
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            offset,
            employees: HashSet::new(),
            events: Vec::new(),
        }
    }

    pub fn add_employee(&mut self, id: impl Into<String>) {
        self.employees.insert(id.into());
    }

    /// Store an event; ids are assigned sequentially when unset.
    pub fn push(&mut self, mut event: Event) {
        if event.id == 0 {
            event.id = self.events.len() as i64 + 1;
        }
        self.events.push(event);
    }

    fn ordered<'e>(&self, it: impl Iterator<Item = &'e Event>) -> Vec<Event> {
        let mut out: Vec<Event> = it.cloned().collect();
        out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        out
    }
}

impl EventStore for MemoryEventStore {
    fn employee_exists(&self, employee_id: &str) -> AppResult<bool> {
        Ok(self.employees.contains(employee_id))
    }

    fn events_for_employee(
        &self,
        employee_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Event>> {
        Ok(self.ordered(self.events.iter().filter(|e| {
            let d = e.local_date(&self.offset);
            e.employee_id == employee_id && d >= from && d <= to
        })))
    }

    fn events_for_snapshot(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        Ok(self.ordered(
            self.events
                .iter()
                .filter(|e| e.local_date(&self.offset) == date),
        ))
    }
}
