//! Greedy, seed-anchored proximity clustering for the live map.
//!
//! Each unprocessed event in input order seeds a cluster and absorbs every
//! later unprocessed event strictly closer than
//! [`CLUSTER_DISTANCE_THRESHOLD_METERS`] to the *seed*. Linkage is to the
//! seed only, never transitive, so the partition depends on input order.

use super::CLUSTER_DISTANCE_THRESHOLD_METERS;
use crate::models::cluster::{Cluster, MajorityKind};
use crate::models::event::Event;
use crate::utils::geo::{GeoPoint, centroid};
use tracing::{debug, warn};

pub struct ProximityClusterer;

impl ProximityClusterer {
    /// Partition the events with valid coordinates into clusters.
    /// Events with missing or non-finite coordinates are skipped.
    pub fn cluster(events: &[Event]) -> Vec<Cluster> {
        let (valid, dropped) = Self::valid_events(events);

        if dropped > 0 {
            warn!(
                dropped,
                total = events.len(),
                "excluded events with invalid coordinates from clustering"
            );
        }

        let mut processed = vec![false; valid.len()];
        let mut clusters = Vec::new();

        for i in 0..valid.len() {
            if processed[i] {
                continue;
            }
            processed[i] = true;

            let (seed, seed_pos) = valid[i];
            let mut members = vec![seed];
            let mut points = vec![seed_pos];

            for j in (i + 1)..valid.len() {
                if processed[j] {
                    continue;
                }

                let (candidate, pos) = valid[j];
                if seed_pos.distance_to(&pos) < CLUSTER_DISTANCE_THRESHOLD_METERS {
                    processed[j] = true;
                    members.push(candidate);
                    points.push(pos);
                }
            }

            clusters.push(Self::build(&members, &points));
        }

        debug!(
            events = valid.len(),
            clusters = clusters.len(),
            "clustered snapshot"
        );

        clusters
    }

    /// Events paired with their coordinates, plus the number dropped.
    pub fn valid_events(events: &[Event]) -> (Vec<(&Event, GeoPoint)>, usize) {
        let valid: Vec<(&Event, GeoPoint)> = events
            .iter()
            .filter_map(|e| e.position().map(|p| (e, p)))
            .collect();
        let dropped = events.len() - valid.len();
        (valid, dropped)
    }

    fn build(members: &[&Event], points: &[GeoPoint]) -> Cluster {
        let check_ins = members.iter().filter(|e| e.kind.is_check_in()).count();
        let check_outs = members.len() - check_ins;

        Cluster {
            seed_employee_id: members[0].employee_id.clone(),
            // Non-empty: the seed is always present.
            centroid: centroid(points).unwrap_or(points[0]),
            members: members.iter().map(|e| (*e).clone()).collect(),
            majority_kind: MajorityKind::from_counts(check_ins, check_outs),
        }
    }
}
