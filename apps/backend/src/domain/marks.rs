//! The hidden suit a player must guess each round.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Mark {
    pub const ALL: [Mark; 4] = [Mark::Spades, Mark::Diamonds, Mark::Clubs, Mark::Hearts];

    /// Uniform draw from the deck. Each draw is independent; a player keeping
    /// the same mark across rounds is allowed.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Mark {
        Mark::ALL[rng.random_range(0..Mark::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Spades => "spades",
            Mark::Diamonds => "diamonds",
            Mark::Clubs => "clubs",
            Mark::Hearts => "hearts",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = DomainError;

    /// Case-insensitive parse. Anything outside the four suits is a
    /// validation error surfaced to the submitter; the evaluator never sees
    /// it and treats the player as having no guess.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spades" => Ok(Mark::Spades),
            "diamonds" => Ok(Mark::Diamonds),
            "clubs" => Ok(Mark::Clubs),
            "hearts" => Ok(Mark::Hearts),
            other => Err(DomainError::validation(
                ValidationKind::UnknownMark,
                format!("unknown mark: {other}"),
            )),
        }
    }
}
