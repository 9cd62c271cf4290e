//! Simulated-player decision-making.
//!
//! Guess selection sits behind the [`GuessStrategy`] trait so tests can pin
//! deterministic strategies and future bots can be smarter than uniform
//! random.

mod random;

pub use random::RandomGuesser;

use std::fmt;

use crate::domain::Mark;
use crate::error::AppError;

/// What a simulated player knows when guessing: its own assigned mark.
///
/// The stock guesser ignores it (bots guess blind, like everyone else);
/// strategies used in tests read it to force deterministic outcomes.
#[derive(Debug, Clone, Copy)]
pub struct BotView {
    pub mark: Mark,
}

/// Errors that can occur during bot decision-making.
#[derive(Debug)]
pub enum AiError {
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "bot internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("bot error: {err}"))
    }
}

/// Trait for bot guess strategies.
pub trait GuessStrategy: Send + Sync {
    /// Choose the suit a simulated player submits during confinement.
    fn choose_guess(&self, view: &BotView) -> Result<Mark, AiError>;
}
