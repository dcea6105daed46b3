use super::event::Event;
use crate::utils::geo::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorityKind {
    CheckInMajority,
    CheckOutMajority,
    Mixed,
}

impl MajorityKind {
    /// Equal counts are `Mixed`; there is no other tie-break.
    pub fn from_counts(check_ins: usize, check_outs: usize) -> Self {
        if check_ins > check_outs {
            MajorityKind::CheckInMajority
        } else if check_outs > check_ins {
            MajorityKind::CheckOutMajority
        } else {
            MajorityKind::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MajorityKind::CheckInMajority => "entrada",
            MajorityKind::CheckOutMajority => "salida",
            MajorityKind::Mixed => "mixed",
        }
    }
}

/// Spatial group of snapshot events anchored at a seed event.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub seed_employee_id: String,
    pub centroid: GeoPoint,
    /// Seed first, then the absorbed events in input order. Never empty.
    pub members: Vec<Event>,
    pub majority_kind: MajorityKind,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn seed(&self) -> &Event {
        &self.members[0]
    }

    pub fn check_in_count(&self) -> usize {
        self.members.iter().filter(|e| e.kind.is_check_in()).count()
    }

    pub fn check_out_count(&self) -> usize {
        self.members.iter().filter(|e| e.kind.is_check_out()).count()
    }

    pub fn member_ids(&self) -> Vec<i64> {
        self.members.iter().map(|e| e.id).collect()
    }
}
