//! Simulated-player guess scheduling.
//!
//! At confinement entry every living bot gets one independently delayed
//! task, racing real players inside the window. There is no ordering
//! guarantee between bots or against human submissions.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use tracing::{info, warn};

use super::GameFlow;
use crate::ai::BotView;
use crate::domain::{Phase, PlayerId, SessionState};
use crate::ws::protocol::GameEvent;

impl GameFlow {
    /// Arm one deferred guess per living bot, uniformly delayed within the
    /// confinement window. Called with the session lock held.
    pub(super) fn schedule_bot_guesses(&self, state: &SessionState, round: u32) {
        let window_ms = self
            .inner
            .config
            .confinement_duration
            .as_millis()
            .max(1) as u64;
        let bots: Vec<PlayerId> = state.living().filter(|p| p.is_bot).map(|p| p.id).collect();

        let mut rng = self.inner.rng.lock();
        let mut timers = self.inner.timers.lock();
        for id in bots {
            let delay = Duration::from_millis(rng.random_range(0..window_ms));
            let weak = self.downgrade();
            let handle = tokio::spawn(async move {
                sleep(delay).await;
                if let Some(flow) = GameFlow::from_weak(&weak) {
                    flow.submit_bot_guess(id, round);
                }
            });
            timers.arm_bot(id, handle);
        }
    }

    /// Fire one bot's guess. Guards against the bot having been eliminated
    /// or having already guessed since the task was armed, and against the
    /// round having moved on.
    fn submit_bot_guess(&self, id: PlayerId, round: u32) {
        let mut state = self.inner.state.lock();
        if state.phase != (Phase::Confined { round }) {
            return;
        }
        let Some(player) = state.player(id) else {
            return;
        };
        if !player.alive || player.guess.is_some() {
            return;
        }

        let view = BotView { mark: player.mark };
        let mark = match self.inner.strategy.choose_guess(&view) {
            Ok(mark) => mark,
            Err(err) => {
                warn!(player_id = %id, error = %err, "Bot strategy failed");
                return;
            }
        };
        state.record_guess(id, mark);
        info!(player_id = %id, mark = %mark, "Bot submitted guess");
        self.inner.hub.broadcast(&GameEvent::BotGuess { id, mark });
    }
}
