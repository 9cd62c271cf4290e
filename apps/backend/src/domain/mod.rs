//! Pure game logic: no clocks, no channels, no I/O.
//!
//! Everything temporal (deferred triggers, bot scheduling) lives in
//! `services::game_flow`; everything here can be driven synchronously with a
//! caller-supplied RNG, which is how the unit and property tests exercise it.

pub mod evaluation;
pub mod marks;
pub mod phase;
pub mod player;
pub mod session;

pub use evaluation::{evaluate_round, RoundEvaluation, RoundOutcome, Verdict};
pub use marks::Mark;
pub use phase::Phase;
pub use player::{Player, PlayerId, Role};
pub use session::SessionState;
