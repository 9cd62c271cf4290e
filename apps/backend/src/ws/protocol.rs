use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Mark, Player, PlayerId};

/// Events emitted by the session core toward the transport layer.
///
/// Most variants are broadcast to every registered connection;
/// `current_players`, `eliminated`, `survived`, `guess_received`, and
/// `jack_role` are only ever unicast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Readiness of every human participant, keyed by id.
    WaitingRoomUpdate { ready: BTreeMap<PlayerId, bool> },

    GameStarting,

    /// Carries the full round duration, or the remaining time when
    /// synthesized for a late joiner.
    RoundStarted { round: u32, duration_ms: u64 },

    ConfinementStarted { duration_ms: u64 },

    JackAssigned { id: PlayerId },

    BotGuess { id: PlayerId, mark: Mark },

    GameOver { message: String },

    NewPlayer { player: Player },

    DisconnectPlayer { id: PlayerId },

    /// Snapshot of every current record, sent to a joining connection.
    CurrentPlayers { players: Vec<Player> },

    Eliminated { reason: String },

    Survived { message: String },

    GuessReceived { mark: Mark },

    /// Privately tells the chosen Jack their own mark.
    JackRole { mark: Mark },
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn events_are_tagged_snake_case() {
        let event = GameEvent::RoundStarted {
            round: 2,
            duration_ms: 300_000,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "round_started");
        assert_eq!(json["round"], 2);
        assert_eq!(json["duration_ms"], 300_000);
    }

    #[test]
    fn marks_serialize_as_suit_names() {
        let id = Uuid::new_v4();
        let event = GameEvent::BotGuess {
            id,
            mark: Mark::Hearts,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "bot_guess");
        assert_eq!(json["mark"], "hearts");
        assert_eq!(json["id"], id.to_string());
    }
}
