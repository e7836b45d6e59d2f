use serde::{Deserialize, Serialize};

use crate::{CardId, Symbol};

/// One card of a deal, in the state the player last saw it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            revealed: false,
            matched: false,
        }
    }

    /// Whether a flip on this card may be accepted.
    pub const fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    /// Symbol the player can currently see, if any.
    pub const fn visible_symbol(&self) -> Option<Symbol> {
        if self.revealed || self.matched {
            Some(self.symbol)
        } else {
            None
        }
    }
}
