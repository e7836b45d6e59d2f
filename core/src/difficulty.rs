use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

const EASY_SYMBOLS: [char; 3] = ['🐶', '🐱', '🐼'];
const MEDIUM_SYMBOLS: [char; 8] = ['🐶', '🐱', '🐼', '🦊', '🐸', '🐵', '🦁', '🐧'];
const HARD_SYMBOLS: [char; 12] = [
    '🐶', '🐱', '🐼', '🦊', '🐸', '🐵', '🦁', '🐧', '🎸', '🚀', '🎨', '🌈',
];

/// Built-in difficulty levels offered to the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    pub fn config(self) -> DifficultyConfig {
        use Difficulty::*;
        let (columns, symbols, stars): (u8, &[char], _) = match self {
            Easy => (3, &EASY_SYMBOLS[..], StarThresholds::new(6, 10)),
            Medium => (4, &MEDIUM_SYMBOLS[..], StarThresholds::new(12, 18)),
            Hard => (6, &HARD_SYMBOLS[..], StarThresholds::new(18, 28)),
        };
        let symbols = symbols.iter().copied().map(Symbol).collect();
        DifficultyConfig::new_unchecked(columns, symbols, stars)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}

/// Move-count ceilings for the rating tiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarThresholds {
    pub three_star: MoveCount,
    pub two_star: MoveCount,
}

impl StarThresholds {
    pub const fn new(three_star: MoveCount, two_star: MoveCount) -> Self {
        Self {
            three_star,
            two_star,
        }
    }

    pub const fn rate(self, moves: MoveCount) -> u8 {
        rating(moves, self)
    }
}

/// Star tier earned by finishing in `moves` moves: 3, 2 or 1.
pub const fn rating(moves: MoveCount, thresholds: StarThresholds) -> u8 {
    if moves <= thresholds.three_star {
        3
    } else if moves <= thresholds.two_star {
        2
    } else {
        1
    }
}

/// Everything needed to deal and score one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    columns: u8,
    symbols: Vec<Symbol>,
    stars: StarThresholds,
}

impl DifficultyConfig {
    pub(crate) fn new_unchecked(columns: u8, symbols: Vec<Symbol>, stars: StarThresholds) -> Self {
        Self {
            columns,
            symbols,
            stars,
        }
    }

    pub fn new(columns: u8, symbols: Vec<Symbol>, stars: StarThresholds) -> Result<Self> {
        if columns == 0 {
            return Err(GameError::InvalidColumns);
        }
        if symbols.is_empty() {
            return Err(GameError::NoSymbols);
        }
        if symbols.len() * 2 > MAX_CARDS {
            return Err(GameError::TooManyPairs);
        }
        let distinct: BTreeSet<_> = symbols.iter().collect();
        if distinct.len() != symbols.len() {
            return Err(GameError::DuplicateSymbol);
        }
        if stars.three_star > stars.two_star {
            return Err(GameError::InvalidThresholds);
        }
        Ok(Self::new_unchecked(columns, symbols, stars))
    }

    /// Number of distinct symbols, half the deck size.
    pub fn pair_count(&self) -> PairCount {
        // bounded by MAX_CARDS / 2 at construction
        self.symbols.len() as PairCount
    }

    pub fn card_count(&self) -> usize {
        self.symbols.len() * 2
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.card_count().div_ceil(self.columns.into())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn stars(&self) -> StarThresholds {
        self.stars
    }
}

impl From<Difficulty> for DifficultyConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn builtin_tables_match_grid_sizes() {
        let sizes: Vec<_> = Difficulty::ALL
            .into_iter()
            .map(|d| {
                let config = d.config();
                (config.pair_count(), config.columns(), config.rows())
            })
            .collect();

        assert_eq!(sizes, vec![(3, 3, 2), (8, 4, 4), (12, 6, 4)]);
    }

    #[test]
    fn builtin_tables_pass_validation() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            let checked =
                DifficultyConfig::new(config.columns(), config.symbols().to_vec(), config.stars());
            assert_eq!(checked, Ok(config), "{difficulty}");
        }
    }

    #[test]
    fn rating_boundaries_for_medium() {
        let stars = Difficulty::Medium.config().stars();

        assert_eq!(rating(12, stars), 3);
        assert_eq!(rating(13, stars), 2);
        assert_eq!(rating(18, stars), 2);
        assert_eq!(rating(19, stars), 1);
        assert_eq!(stars.rate(0), 3);
    }

    #[test]
    fn default_difficulty_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty)
        );
    }

    #[test]
    fn custom_config_rejects_bad_input() {
        let stars = StarThresholds::new(1, 2);
        let a = Symbol('a');

        assert_eq!(
            DifficultyConfig::new(0, vec![a], stars),
            Err(GameError::InvalidColumns)
        );
        assert_eq!(
            DifficultyConfig::new(2, vec![], stars),
            Err(GameError::NoSymbols)
        );
        assert_eq!(
            DifficultyConfig::new(2, vec![a, a], stars),
            Err(GameError::DuplicateSymbol)
        );
        assert_eq!(
            DifficultyConfig::new(2, vec![a], StarThresholds::new(3, 2)),
            Err(GameError::InvalidThresholds)
        );

        let too_many = ('\u{4e00}'..).take(MAX_CARDS / 2 + 1).map(Symbol).collect();
        assert_eq!(
            DifficultyConfig::new(8, too_many, stars),
            Err(GameError::TooManyPairs)
        );
    }
}
