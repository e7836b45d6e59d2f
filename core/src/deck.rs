use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// An ordered deal of cards; positions never change during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Lays out `symbols` in the given order, ids assigned by position.
    ///
    /// Fails unless every symbol occurs exactly twice.
    pub fn from_symbols(symbols: &[Symbol]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(GameError::NoSymbols);
        }
        if symbols.len() > MAX_CARDS {
            return Err(GameError::TooManyPairs);
        }

        let mut counts = BTreeMap::<Symbol, u8>::new();
        for &symbol in symbols {
            let count = counts.entry(symbol).or_default();
            *count = count.saturating_add(1);
        }
        if counts.values().any(|&count| count != 2) {
            return Err(GameError::UnpairedSymbol);
        }

        Ok(Self::from_ordered(symbols.to_vec()))
    }

    pub(crate) fn from_ordered(symbols: Vec<Symbol>) -> Self {
        debug_assert!(symbols.len() <= MAX_CARDS, "{} cards overflow CardId", symbols.len());
        let cards = symbols
            .into_iter()
            .zip(0..=CardId::MAX)
            .map(|(symbol, id)| Card::new(id, symbol))
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> PairCount {
        (self.cards.len() / 2) as PairCount
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(usize::from(id))
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cards.iter().map(|card| card.symbol)
    }
}

impl Index<CardId> for Deck {
    type Output = Card;

    fn index(&self, id: CardId) -> &Self::Output {
        &self.cards[usize::from(id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(s: &str) -> Vec<Symbol> {
        s.chars().map(Symbol).collect()
    }

    #[test]
    fn fixed_deck_keeps_order_and_assigns_positional_ids() {
        let deck = Deck::from_symbols(&symbols("ABACBC")).unwrap();

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.pair_count(), 3);
        assert_eq!(deck.symbols().collect::<Vec<_>>(), symbols("ABACBC"));
        for (position, card) in deck.cards().iter().enumerate() {
            assert_eq!(usize::from(card.id), position);
            assert!(!card.revealed && !card.matched);
        }
        assert_eq!(deck[3].symbol, Symbol('C'));
        assert!(deck.get(6).is_none());
    }

    #[test]
    fn fixed_deck_rejects_unpaired_symbols() {
        assert_eq!(
            Deck::from_symbols(&symbols("ABA")),
            Err(GameError::UnpairedSymbol)
        );
        assert_eq!(
            Deck::from_symbols(&symbols("AAAA")),
            Err(GameError::UnpairedSymbol)
        );
        assert_eq!(Deck::from_symbols(&[]), Err(GameError::NoSymbols));
    }
}
