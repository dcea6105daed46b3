pub mod cluster;
pub mod daily_stats;
pub mod employee;
pub mod event;
pub mod event_kind;
pub mod session_summary;
