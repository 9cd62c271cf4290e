//! Session orchestration service - bridges the pure domain state machine to
//! timers and transport notifications.
//!
//! Split by concern: `waiting_room` (lobby gating and membership),
//! `player_actions` (inbound guesses), `round_lifecycle` (phase
//! transitions), `bot_coordinator` (simulated guesses), `timers` (armed
//! trigger handles).

mod bot_coordinator;
mod player_actions;
mod round_lifecycle;
mod timers;
mod waiting_room;

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::ai::{GuessStrategy, RandomGuesser};
use crate::config::GameConfig;
use crate::domain::{Phase, Player, SessionState};
use crate::error::AppError;
use crate::ws::hub::GameHub;
use crate::ws::protocol::GameEvent;

use timers::Timers;

/// Handle to the process-lifetime game session.
///
/// Cheap to clone. Every inbound event, scheduler trigger, and bot trigger
/// serializes its whole synchronous step behind the one session mutex, which
/// is the single-threaded-step guarantee the round logic relies on.
#[derive(Clone)]
pub struct GameFlow {
    inner: Arc<Inner>,
}

struct Inner {
    config: GameConfig,
    hub: Arc<dyn GameHub>,
    strategy: Arc<dyn GuessStrategy>,
    state: Mutex<SessionState>,
    rng: Mutex<StdRng>,
    /// When the current round entered `Active`, for late-joiner catch-up.
    round_started_at: Mutex<Option<Instant>>,
    timers: Mutex<Timers>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.timers.lock().cancel_all();
    }
}

impl GameFlow {
    /// Create the session with the stock uniform-random bot guesser and seed
    /// the configured number of simulated players.
    pub fn new(config: GameConfig, hub: Arc<dyn GameHub>) -> Result<Self, AppError> {
        Self::with_strategy(config, hub, Arc::new(RandomGuesser::new(None)))
    }

    /// As [`GameFlow::new`] with a caller-chosen bot strategy.
    pub fn with_strategy(
        config: GameConfig,
        hub: Arc<dyn GameHub>,
        strategy: Arc<dyn GuessStrategy>,
    ) -> Result<Self, AppError> {
        let config = config.validated()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let flow = Self {
            inner: Arc::new(Inner {
                config,
                hub,
                strategy,
                state: Mutex::new(SessionState::new()),
                rng: Mutex::new(rng),
                round_started_at: Mutex::new(None),
                timers: Mutex::new(Timers::default()),
            }),
        };
        flow.seed_bots();
        Ok(flow)
    }

    fn seed_bots(&self) {
        let mut state = self.inner.state.lock();
        for _ in 0..self.inner.config.initial_bot_count {
            let id = Uuid::new_v4();
            let player = {
                let mut rng = self.inner.rng.lock();
                state.add_player(id, true, &mut *rng).clone()
            };
            info!(player_id = %id, "Simulated player seeded");
            self.inner.hub.broadcast(&GameEvent::NewPlayer { player });
        }
    }

    // ---- Simple reads for the transport layer ----

    pub fn waiting_room(&self) -> bool {
        self.inner.state.lock().waiting_room
    }

    pub fn in_progress(&self) -> bool {
        self.inner.state.lock().in_progress
    }

    pub fn current_round(&self) -> u32 {
        self.inner.state.lock().current_round
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.lock().phase
    }

    /// Snapshot of every player record as of this instant.
    pub fn players(&self) -> Vec<Player> {
        self.inner.state.lock().players().cloned().collect()
    }

    // ---- Internal plumbing ----

    fn downgrade(&self) -> Weak<Inner> {
        Arc::downgrade(&self.inner)
    }

    fn from_weak(weak: &Weak<Inner>) -> Option<GameFlow> {
        weak.upgrade().map(|inner| GameFlow { inner })
    }
}
