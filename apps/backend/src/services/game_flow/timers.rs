//! Armed deferred triggers.
//!
//! One handle per trigger kind. Arming replaces and aborts any previously
//! outstanding handle, so a re-entered scheduler can never leave two triggers
//! racing toward the same transition.

use std::collections::HashMap;

use tokio::task::JoinHandle;

use crate::domain::PlayerId;

#[derive(Default)]
pub(super) struct Timers {
    /// Round start -> confinement start.
    round: Option<JoinHandle<()>>,
    /// Confinement start -> evaluation.
    confinement: Option<JoinHandle<()>>,
    /// One pending guess per simulated player.
    bots: HashMap<PlayerId, JoinHandle<()>>,
}

impl Timers {
    pub(super) fn arm_round(&mut self, handle: JoinHandle<()>) {
        if let Some(existing) = self.round.replace(handle) {
            existing.abort();
        }
    }

    pub(super) fn arm_confinement(&mut self, handle: JoinHandle<()>) {
        if let Some(existing) = self.confinement.replace(handle) {
            existing.abort();
        }
    }

    pub(super) fn arm_bot(&mut self, id: PlayerId, handle: JoinHandle<()>) {
        if let Some(existing) = self.bots.insert(id, handle) {
            existing.abort();
        }
    }

    /// Abort every pending bot guess. Called at the evaluation cutoff and
    /// when the session ends early, so no stale guess leaks into a later
    /// round.
    pub(super) fn cancel_bots(&mut self) {
        for (_, handle) in self.bots.drain() {
            handle.abort();
        }
    }

    pub(super) fn cancel_all(&mut self) {
        if let Some(handle) = self.round.take() {
            handle.abort();
        }
        if let Some(handle) = self.confinement.take() {
            handle.abort();
        }
        self.cancel_bots();
    }
}
