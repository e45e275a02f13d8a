//! # Core Type Definitions
//!
//! Shared identifier types used across the compatibility surface.
//!
//! ## Key Types
//!
//! - [`ActorId`] - Unique identifier for a connected actor (player) on the host

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connected actor on the host.
///
/// This is a wrapper around UUID that provides type safety and ensures
/// actor IDs cannot be confused with other kinds of IDs handed out by the
/// host runtime.
///
/// # Examples
///
/// ```rust
/// use shop_compat::ActorId;
///
/// // Create a new random actor ID
/// let actor_id = ActorId::new();
///
/// // Parse from string
/// let actor_id = ActorId::from_str("550e8400-e29b-41d4-a716-446655440000")?;
/// # Ok::<(), uuid::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Creates a new random actor ID using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an actor ID from a string representation.
    ///
    /// Returns `Ok(ActorId)` if the string is a valid UUID, otherwise
    /// `Err(uuid::Error)` with details about the parsing failure.
    pub fn from_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::str::FromStr for ActorId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s)
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_round_trip() {
        let id = ActorId::new();
        let parsed = ActorId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_actor_id_rejects_garbage() {
        assert!(ActorId::from_str("not-an-id").is_err());
    }
}
