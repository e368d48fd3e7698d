//! # Identifiers
//!
//! Newtype wrappers for domain identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a hackathon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HackathonId(pub Uuid);

impl HackathonId {
    /// Generate a new random hackathon identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for HackathonId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for HackathonId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for HackathonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
