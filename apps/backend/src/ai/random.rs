//! Uniform-random guesser, the reference [`GuessStrategy`] implementation.

use std::sync::Mutex;

use rand::prelude::*;

use super::{AiError, BotView, GuessStrategy};
use crate::domain::Mark;

/// Chooses uniformly among the four marks, ignoring everything the bot
/// knows.
///
/// The RNG lives behind a `Mutex` because strategy methods take `&self`; an
/// optional seed makes behavior reproducible in tests.
pub struct RandomGuesser {
    rng: Mutex<StdRng>,
}

impl RandomGuesser {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl GuessStrategy for RandomGuesser {
    fn choose_guess(&self, _view: &BotView) -> Result<Mark, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Mark::ALL
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("empty mark deck".into()))
    }
}
