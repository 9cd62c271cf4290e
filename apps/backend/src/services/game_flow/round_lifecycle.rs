//! Phase transitions: round start, confinement, and the evaluation cutoff.

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use super::GameFlow;
use crate::domain::evaluation::{self, RoundOutcome, Verdict};
use crate::domain::{Phase, SessionState};
use crate::ws::protocol::GameEvent;

const ELIMINATED_REASON: &str = "Wrong guess or no guess submitted";
const SURVIVED_MESSAGE: &str = "Correct guess! You survive to the next round.";
const JACK_ELIMINATED_MESSAGE: &str = "Jack of Hearts eliminated. All surviving players win!";
const JACK_WINS_MESSAGE: &str = "Only two players remain with the Jack of Hearts. Jack wins!";

impl GameFlow {
    /// Enter `Active(round)`: reset guesses and marks for the living, clear
    /// human readiness, converge on a Jack, announce the round, and arm the
    /// confinement trigger. Called with the session lock held.
    pub(super) fn enter_round(&self, state: &mut SessionState, round: u32) {
        state.phase = Phase::Active { round };
        state.in_progress = true;
        info!(round, "Starting round");

        {
            let mut rng = self.inner.rng.lock();
            state.begin_round(&mut *rng);
            if let Some(jack_id) = state.ensure_jack(&mut *rng) {
                info!(player_id = %jack_id, "Assigned Jack of Hearts");
                self.inner
                    .hub
                    .broadcast(&GameEvent::JackAssigned { id: jack_id });
                // The Jack alone learns their own mark up front.
                if let Some(jack) = state.player(jack_id) {
                    self.inner
                        .hub
                        .unicast(jack_id, &GameEvent::JackRole { mark: jack.mark });
                }
            }
        }

        *self.inner.round_started_at.lock() = Some(Instant::now());
        self.inner.hub.broadcast(&GameEvent::RoundStarted {
            round,
            duration_ms: self.inner.config.round_duration.as_millis() as u64,
        });

        let delay = self.inner.config.pre_confinement();
        let weak = self.downgrade();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if let Some(flow) = GameFlow::from_weak(&weak) {
                flow.start_confinement(round);
            }
        });
        self.inner.timers.lock().arm_round(handle);
    }

    /// Enter `Confined(round)`: announce the window, schedule one guess per
    /// living bot, and arm the evaluation trigger. A trigger that outlived
    /// its round is dropped.
    pub(super) fn start_confinement(&self, round: u32) {
        let mut state = self.inner.state.lock();
        if state.phase != (Phase::Active { round }) {
            debug!(round, phase = ?state.phase, "Stale confinement trigger ignored");
            return;
        }
        state.phase = Phase::Confined { round };
        info!(round, "Confinement phase started");
        self.inner.hub.broadcast(&GameEvent::ConfinementStarted {
            duration_ms: self.inner.config.confinement_duration.as_millis() as u64,
        });

        self.schedule_bot_guesses(&state, round);

        let delay = self.inner.config.confinement_duration;
        let weak = self.downgrade();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if let Some(flow) = GameFlow::from_weak(&weak) {
                flow.evaluate_guesses(round);
            }
        });
        self.inner.timers.lock().arm_confinement(handle);
    }

    /// The confinement-end cutoff: evaluate every living player's guess, then
    /// either end the session or loop into the next round. Duplicate firings
    /// for the same round are no-ops, so nobody is eliminated twice.
    pub(super) fn evaluate_guesses(&self, round: u32) {
        let mut state = self.inner.state.lock();
        if state.phase != (Phase::Confined { round }) {
            debug!(round, phase = ?state.phase, "Stale evaluation trigger ignored");
            return;
        }
        // Hard cutoff: no bot guess may land past this point.
        self.inner.timers.lock().cancel_bots();

        info!(round, "Evaluating guesses");
        let evaluation = evaluation::evaluate_round(&mut state);
        for (id, verdict) in &evaluation.verdicts {
            match verdict {
                Verdict::Eliminated => {
                    info!(player_id = %id, "Player eliminated");
                    self.inner.hub.unicast(
                        *id,
                        &GameEvent::Eliminated {
                            reason: ELIMINATED_REASON.to_string(),
                        },
                    );
                }
                Verdict::Survived => {
                    self.inner.hub.unicast(
                        *id,
                        &GameEvent::Survived {
                            message: SURVIVED_MESSAGE.to_string(),
                        },
                    );
                }
            }
        }

        match evaluation.outcome {
            RoundOutcome::JackEliminated => self.finish(&mut state, JACK_ELIMINATED_MESSAGE),
            RoundOutcome::JackWins => self.finish(&mut state, JACK_WINS_MESSAGE),
            RoundOutcome::Continue => {
                state.current_round += 1;
                let next = state.current_round;
                self.enter_round(&mut state, next);
            }
        }
    }

    fn finish(&self, state: &mut SessionState, message: &str) {
        state.phase = Phase::GameOver;
        state.in_progress = false;
        info!(message, "Game over");
        self.inner.hub.broadcast(&GameEvent::GameOver {
            message: message.to_string(),
        });
        self.inner.timers.lock().cancel_all();
    }

    /// Time left in the current round, clamped to zero. Zero when no round
    /// has started.
    pub(super) fn remaining_round_time(&self) -> Duration {
        match *self.inner.round_started_at.lock() {
            Some(started_at) => self
                .inner
                .config
                .round_duration
                .saturating_sub(started_at.elapsed()),
            None => Duration::ZERO,
        }
    }
}
