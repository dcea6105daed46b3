use serde::Serialize;

/// Directory entry for a field worker (`auxiliar`).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub created_at: String,
}
