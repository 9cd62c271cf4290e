//! Session design constants.
//!
//! These are fixed by design rather than runtime-tunable: a round is five
//! minutes, the confinement window is the final minute, and three simulated
//! players are seeded at startup. Tests construct shorter configurations
//! through the same struct.

use std::time::Duration;

use crate::error::AppError;

pub const ROUND_DURATION: Duration = Duration::from_millis(300_000);
pub const CONFINEMENT_DURATION: Duration = Duration::from_millis(60_000);
pub const INITIAL_BOT_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Full length of a round, confinement included.
    pub round_duration: Duration,
    /// Terminal sub-window of the round during which guesses are collected.
    pub confinement_duration: Duration,
    /// Simulated players created with the session.
    pub initial_bot_count: usize,
    /// Seed for the session RNG; `None` draws from OS entropy. All mark and
    /// role draws flow from this, so a pinned seed makes a session
    /// reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration: ROUND_DURATION,
            confinement_duration: CONFINEMENT_DURATION,
            initial_bot_count: INITIAL_BOT_COUNT,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Validate the invariant the scheduler relies on: the confinement window
    /// fits inside the round.
    pub fn validated(self) -> Result<Self, AppError> {
        if self.confinement_duration > self.round_duration {
            return Err(AppError::config(format!(
                "confinement duration {:?} exceeds round duration {:?}",
                self.confinement_duration, self.round_duration
            )));
        }
        Ok(self)
    }

    /// Time from round start until the confinement phase begins.
    pub(crate) fn pre_confinement(&self) -> Duration {
        self.round_duration - self.confinement_duration
    }
}
