#![allow(dead_code)]

// tests/common/mod.rs

pub mod proptest_prelude;

use std::sync::Arc;
use std::time::Duration;

use backend::ai::GuessStrategy;
use backend::config::GameConfig;
use backend::test_support::events::CaptureHub;
use backend::{GameFlow, Mark, PlayerId, Role};

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Short, paused-clock friendly timings: confinement begins at t=40s and the
/// evaluation cutoff lands at t=50s.
pub const ROUND: Duration = Duration::from_secs(50);
pub const PRE_CONFINEMENT: Duration = Duration::from_secs(40);
pub const CONFINEMENT: Duration = Duration::from_secs(10);

pub fn short_config(bots: usize) -> GameConfig {
    GameConfig {
        round_duration: ROUND,
        confinement_duration: CONFINEMENT,
        initial_bot_count: bots,
        rng_seed: Some(4242),
    }
}

/// Session wired to a capturing hub with the given bot strategy.
pub fn session(bots: usize, strategy: Arc<dyn GuessStrategy>) -> (GameFlow, Arc<CaptureHub>) {
    let hub = CaptureHub::new();
    let flow =
        GameFlow::with_strategy(short_config(bots), hub.clone(), strategy).expect("valid config");
    (flow, hub)
}

pub fn mark_of(flow: &GameFlow, id: PlayerId) -> Mark {
    flow.players()
        .into_iter()
        .find(|p| p.id == id)
        .expect("player exists")
        .mark
}

pub fn submit_correct(flow: &GameFlow, id: PlayerId) {
    let mark = mark_of(flow, id);
    flow.submit_guess(id, mark.as_str()).expect("valid mark");
}

pub fn submit_wrong(flow: &GameFlow, id: PlayerId) {
    let mark = mark_of(flow, id);
    let wrong = Mark::ALL
        .into_iter()
        .find(|m| *m != mark)
        .expect("another suit exists");
    flow.submit_guess(id, wrong.as_str()).expect("valid mark");
}

/// The current Jack's id; panics if none has been assigned yet.
pub fn jack_id(flow: &GameFlow) -> PlayerId {
    flow.players()
        .into_iter()
        .find(|p| p.role == Some(Role::Jack))
        .expect("jack assigned")
        .id
}
