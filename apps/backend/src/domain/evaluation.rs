//! Guess evaluation and win-condition detection.
//!
//! Runs at the confinement-end cutoff. Each player's fate depends only on
//! their own guess/mark pair, so the pass is order-independent across
//! players. A missing guess is always wrong, never a skip.

use crate::domain::player::PlayerId;
use crate::domain::session::SessionState;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Verdict {
    Survived,
    Eliminated,
}

/// Session-level result of one evaluation pass.
///
/// `JackEliminated` takes precedence over `JackWins`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RoundOutcome {
    /// The Jack lives and more than two players remain; play continues.
    Continue,
    /// No living player holds the Jack role: survivors win.
    JackEliminated,
    /// Exactly two players remain and one is the Jack: the Jack wins.
    JackWins,
}

#[derive(Debug, Clone)]
pub struct RoundEvaluation {
    /// Verdict per player that was alive when the pass started.
    pub verdicts: Vec<(PlayerId, Verdict)>,
    pub outcome: RoundOutcome,
}

/// Compare every living player's guess to their mark, eliminate mismatches,
/// and derive the session outcome.
pub fn evaluate_round(state: &mut SessionState) -> RoundEvaluation {
    let mut verdicts = Vec::new();
    for player in state.players_mut().filter(|p| p.alive) {
        if player.guess == Some(player.mark) {
            verdicts.push((player.id, Verdict::Survived));
        } else {
            player.alive = false;
            verdicts.push((player.id, Verdict::Eliminated));
        }
    }

    let outcome = if state.living_jack().is_none() {
        RoundOutcome::JackEliminated
    } else if state.living_count() == 2 {
        RoundOutcome::JackWins
    } else {
        RoundOutcome::Continue
    };

    RoundEvaluation { verdicts, outcome }
}
