//! Player records and roles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::marks::Mark;

/// Opaque connection-scoped identifier, stable for the connection's lifetime.
pub type PlayerId = Uuid;

/// Special role a player can hold. While anyone is alive the session
/// converges on exactly one living Jack; the role is never silently
/// reassigned mid-round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Jack,
}

/// One participant's record.
///
/// Spatial attributes belong to the transport layer and are not tracked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// The suit this player must guess. Redrawn once per round, at round
    /// start, independent of the previous round's value.
    pub mark: Mark,
    pub role: Option<Role>,
    pub alive: bool,
    pub is_bot: bool,
    /// The guess last submitted this round. Cleared once per round, at round
    /// start.
    pub guess: Option<Mark>,
    /// Pre-game readiness. Simulated players are created ready.
    pub ready: bool,
}

impl Player {
    pub(crate) fn new(id: PlayerId, is_bot: bool, mark: Mark) -> Self {
        Self {
            id,
            mark,
            role: None,
            alive: true,
            is_bot,
            guess: None,
            ready: is_bot,
        }
    }

    pub fn is_jack(&self) -> bool {
        self.role == Some(Role::Jack)
    }
}
