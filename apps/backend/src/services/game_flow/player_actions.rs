//! Inbound guess submission.

use tracing::debug;

use super::GameFlow;
use crate::domain::{Mark, PlayerId};
use crate::error::AppError;
use crate::ws::protocol::GameEvent;

impl GameFlow {
    /// Record a guess for a living participant and acknowledge it.
    ///
    /// Unknown or eliminated ids are silently ignored. A string outside the
    /// suit enumeration is rejected to the caller; the evaluator then treats
    /// the player as having submitted nothing. Only the value stored at the
    /// evaluation instant matters, so resubmitting overwrites freely and a
    /// guess landing after the cutoff is never observed.
    pub fn submit_guess(&self, id: PlayerId, raw: &str) -> Result<(), AppError> {
        let mark: Mark = raw.parse()?;
        let mut state = self.inner.state.lock();
        if !state.record_guess(id, mark) {
            return Ok(());
        }
        debug!(player_id = %id, mark = %mark, "Guess recorded");
        self.inner.hub.unicast(id, &GameEvent::GuessReceived { mark });
        Ok(())
    }
}
