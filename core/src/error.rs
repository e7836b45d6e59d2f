use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Symbol set is empty")]
    NoSymbols,
    #[error("Symbol set contains duplicates")]
    DuplicateSymbol,
    #[error("Too many pairs for a single deck")]
    TooManyPairs,
    #[error("Column count must be positive")]
    InvalidColumns,
    #[error("Three-star threshold exceeds two-star threshold")]
    InvalidThresholds,
    #[error("Every symbol must appear exactly twice in a deck")]
    UnpairedSymbol,
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
