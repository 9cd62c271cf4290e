//! Deterministic guess strategies for driving win conditions in tests.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ai::{AiError, BotView, GuessStrategy};
use crate::domain::Mark;

/// Always guesses the bot's own mark: the bot survives every round.
pub struct CorrectGuesser;

impl GuessStrategy for CorrectGuesser {
    fn choose_guess(&self, view: &BotView) -> Result<Mark, AiError> {
        Ok(view.mark)
    }
}

/// Always guesses a mark that is not the bot's own: the bot is eliminated at
/// the next evaluation.
pub struct WrongGuesser;

impl GuessStrategy for WrongGuesser {
    fn choose_guess(&self, view: &BotView) -> Result<Mark, AiError> {
        Mark::ALL
            .into_iter()
            .find(|m| *m != view.mark)
            .ok_or_else(|| AiError::Internal("no wrong mark available".into()))
    }
}

/// Guesses correctly or wrongly depending on a flag that tests flip between
/// rounds.
#[derive(Default)]
pub struct ToggleGuesser {
    correct: AtomicBool,
}

impl ToggleGuesser {
    pub fn new(correct: bool) -> Self {
        Self {
            correct: AtomicBool::new(correct),
        }
    }

    pub fn set_correct(&self, correct: bool) {
        self.correct.store(correct, Ordering::SeqCst);
    }
}

impl GuessStrategy for ToggleGuesser {
    fn choose_guess(&self, view: &BotView) -> Result<Mark, AiError> {
        if self.correct.load(Ordering::SeqCst) {
            CorrectGuesser.choose_guess(view)
        } else {
            WrongGuesser.choose_guess(view)
        }
    }
}
