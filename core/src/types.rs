use core::fmt;
use serde::{Deserialize, Serialize};

/// Positional identity of a card within one deal.
pub type CardId = u8;

/// Count type used for pair totals and matched pairs.
pub type PairCount = u8;

/// Completed two-card turns.
pub type MoveCount = u32;

/// Whole seconds of play.
pub type Seconds = u32;

/// Largest deck a single game can hold, every id must fit in [`CardId`].
pub const MAX_CARDS: usize = CardId::MAX as usize + 1;

/// Delay between the second flip of a turn and its resolution.
pub const RESOLVE_DELAY_MS: u32 = 800;

/// Period of the elapsed-time clock.
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Pair key shared by exactly two cards of a deck.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub char);

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self(value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
