use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Complete,
    Partial,
    Incomplete,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Complete => "complete",
            SessionStatus::Partial => "partial",
            SessionStatus::Incomplete => "incomplete",
        }
    }
}

/// Derived per-employee, per-date attendance record. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySessionSummary {
    pub employee_id: String,
    pub date: NaiveDate,
    pub check_in_count: usize,
    pub check_out_count: usize,
    /// First check-in to last check-out; only set when the counts match and are nonzero.
    pub worked_duration: Option<Duration>,
    pub visited_places: Vec<String>,
    pub first_event: DateTime<Utc>,
    pub last_event: DateTime<Utc>,
    pub status: SessionStatus,
}
