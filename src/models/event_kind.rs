use serde::Serialize;

/// Check-in (`entrada`) or check-out (`salida`).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum EventKind {
    #[serde(rename = "entrada")]
    CheckIn,
    #[serde(rename = "salida")]
    CheckOut,
}

impl EventKind {
    /// Lenient parse used for CLI and CSV input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "entrada" | "in" | "checkin" | "check-in" => Some(Self::CheckIn),
            "salida" | "out" | "checkout" | "check-out" => Some(Self::CheckOut),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EventKind::CheckIn => "entrada",
            EventKind::CheckOut => "salida",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(EventKind::CheckIn),
            "salida" => Some(EventKind::CheckOut),
            _ => None,
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, EventKind::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, EventKind::CheckOut)
    }
}
