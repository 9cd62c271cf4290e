//! Membership and the pre-game readiness gate.

use tracing::info;

use super::GameFlow;
use crate::domain::{Player, PlayerId, SessionState};
use crate::ws::protocol::GameEvent;

impl GameFlow {
    /// Register a connecting participant.
    ///
    /// The joiner receives the full player snapshot; everyone is told about
    /// the new record. A joiner arriving mid-round additionally gets a
    /// synthesized round-start notification carrying the actual remaining
    /// time, so their clock matches the server's deadline.
    pub fn join(&self, id: PlayerId) {
        let mut state = self.inner.state.lock();
        if state.player(id).is_some() {
            return;
        }
        let player = {
            let mut rng = self.inner.rng.lock();
            state.add_player(id, false, &mut *rng).clone()
        };
        info!(player_id = %id, "Player connected");

        let players: Vec<Player> = state.players().cloned().collect();
        self.inner
            .hub
            .unicast(id, &GameEvent::CurrentPlayers { players });
        self.inner.hub.broadcast(&GameEvent::NewPlayer { player });

        if state.waiting_room {
            self.broadcast_waiting_room(&state);
        } else if state.in_progress {
            let remaining = self.remaining_round_time();
            self.inner.hub.unicast(
                id,
                &GameEvent::RoundStarted {
                    round: state.current_round,
                    duration_ms: remaining.as_millis() as u64,
                },
            );
        }
    }

    /// Remove a departing participant. Unknown ids are ignored.
    pub fn leave(&self, id: PlayerId) {
        let mut state = self.inner.state.lock();
        if state.remove_player(id).is_none() {
            return;
        }
        info!(player_id = %id, "Player disconnected");
        self.inner.hub.broadcast(&GameEvent::DisconnectPlayer { id });
        if state.waiting_room {
            self.broadcast_waiting_room(&state);
        }
    }

    /// Flag a human participant ready. When the last living human readies up
    /// the gate releases the session into round 1, exactly once; once the
    /// waiting room is left the gate never re-fires.
    pub fn set_ready(&self, id: PlayerId) {
        let mut state = self.inner.state.lock();
        if !state.mark_ready(id) {
            return;
        }
        info!(player_id = %id, "Player ready");
        self.broadcast_waiting_room(&state);

        if state.waiting_room && state.all_humans_ready() {
            state.waiting_room = false;
            info!("All players ready, starting game");
            self.inner.hub.broadcast(&GameEvent::GameStarting);
            let round = state.current_round;
            self.enter_round(&mut state, round);
        }
    }

    pub(super) fn broadcast_waiting_room(&self, state: &SessionState) {
        self.inner.hub.broadcast(&GameEvent::WaitingRoomUpdate {
            ready: state.ready_states(),
        });
    }
}
