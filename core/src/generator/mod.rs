use crate::*;
pub use shuffled::*;

mod shuffled;

/// Source of fresh deals for new games.
pub trait DeckGenerator {
    fn generate(&mut self, config: &DifficultyConfig) -> Deck;
}
