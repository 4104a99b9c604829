use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for restaurant tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub i64);

impl From<i64> for TableId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
