//! Game engine for Memorou, a card-pairs memory game.
//!
//! [`GameState`] is the turn state machine: flips, deferred resolution of a
//! selected pair, move and clock bookkeeping, win detection. [`GameSession`]
//! wraps it with an injected [`Scheduler`] that owns the one-second clock and
//! the resolution delay.
#![no_std]

extern crate alloc;

pub use card::*;
pub use deck::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use scheduler::*;
pub use session::*;
pub use types::*;

mod card;
mod deck;
mod difficulty;
mod engine;
mod error;
mod generator;
mod scheduler;
mod session;
mod types;
