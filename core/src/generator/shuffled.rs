use alloc::vec::Vec;
use rand::prelude::*;
use rand::seq::SliceRandom;

use super::*;

/// Deals every symbol twice in a uniformly random order.
///
/// The generator keeps its RNG between deals, so a fixed seed reproduces the
/// whole sequence of games, not just the first one.
#[derive(Clone, Debug)]
pub struct ShuffledDeckGenerator {
    rng: SmallRng,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(&mut self, config: &DifficultyConfig) -> Deck {
        let mut symbols: Vec<Symbol> = config
            .symbols()
            .iter()
            .chain(config.symbols())
            .copied()
            .collect();

        symbols.shuffle(&mut self.rng);
        Deck::from_ordered(symbols)
    }
}
