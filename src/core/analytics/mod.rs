//! Attendance analytics engine.
//!
//! Pure, synchronous transforms over an event batch owned by the caller:
//! daily session summaries for the history panel, proximity clusters for the
//! live map and the per-date statistics panel.

pub mod clusters;
pub mod sessions;
pub mod stats;

use std::ops::RangeInclusive;

pub use crate::utils::geo::EARTH_RADIUS_KM;
pub use clusters::ProximityClusterer;
pub use sessions::{SessionReconstructor, classify, summarize_day, summarize_days};
pub use stats::daily_stats;

/// Accepted values for the history lookback, in days.
pub const LOOKBACK_DAYS: RangeInclusive<u32> = 1..=90;

/// Events strictly closer than this to a cluster seed join its cluster.
pub const CLUSTER_DISTANCE_THRESHOLD_METERS: f64 = 50.0;

/// Minimum first-in/last-out span for a `Complete` day.
pub const COMPLETE_SHIFT_HOURS: i64 = 8;

/// Places listed in the statistics panel.
pub const TOP_PLACES_LIMIT: usize = 5;
