use core::num::Saturating;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Input to the turn state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Player asks to turn a card face up.
    Flip(CardId),
    /// The resolution delay of a completed pair has elapsed.
    Resolve,
    /// One second of play has elapsed.
    Tick,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    NoChange,
    /// First card of a turn is face up.
    Revealed,
    /// Second card is face up, input is locked until resolution.
    PairSelected,
    Matched,
    Mismatched,
    /// The last pair was matched.
    Won,
    Ticked,
}

impl TurnOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Complete state of one game, replaced wholesale on restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    config: DifficultyConfig,
    deck: Deck,
    moves: Saturating<MoveCount>,
    matched_pairs: PairCount,
    elapsed_seconds: Saturating<Seconds>,
    pending_selection: SmallVec<[CardId; 2]>,
    resolution_lock: bool,
    timer_running: bool,
}

impl GameState {
    pub fn new(config: DifficultyConfig, deck: Deck) -> Self {
        if deck.pair_count() != config.pair_count() {
            log::warn!(
                "Deck holds {} pairs but config expects {}, win follows the deck",
                deck.pair_count(),
                config.pair_count()
            );
        }
        Self {
            config,
            deck,
            moves: Saturating(0),
            matched_pairs: 0,
            elapsed_seconds: Saturating(0),
            pending_selection: SmallVec::new(),
            resolution_lock: false,
            timer_running: false,
        }
    }

    /// Deals a new game for `config` from `generator`.
    pub fn deal(config: DifficultyConfig, generator: &mut impl DeckGenerator) -> Self {
        let deck = generator.generate(&config);
        Self::new(config, deck)
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    pub fn moves(&self) -> MoveCount {
        self.moves.0
    }

    pub fn matched_pairs(&self) -> PairCount {
        self.matched_pairs
    }

    pub fn pair_count(&self) -> PairCount {
        self.deck.pair_count()
    }

    pub fn elapsed_seconds(&self) -> Seconds {
        self.elapsed_seconds.0
    }

    pub fn pending_selection(&self) -> &[CardId] {
        &self.pending_selection
    }

    pub fn is_input_locked(&self) -> bool {
        self.resolution_lock
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.pair_count()
    }

    /// Star tier for the current move count; meaningful once won.
    pub fn rating(&self) -> u8 {
        rating(self.moves(), self.config.stars())
    }

    pub fn apply(&mut self, action: Action) -> TurnOutcome {
        match action {
            Action::Flip(id) => self.flip(id),
            Action::Resolve => self.resolve(),
            Action::Tick => self.tick(),
        }
    }

    pub fn flip(&mut self, id: CardId) -> TurnOutcome {
        if self.resolution_lock {
            log::trace!("flip {} rejected, resolution pending", id);
            return TurnOutcome::NoChange;
        }
        let Some(card) = self.deck.cards_mut().get_mut(usize::from(id)) else {
            log::trace!("flip {} rejected, no such card", id);
            return TurnOutcome::NoChange;
        };
        if !card.is_selectable() {
            log::trace!("flip {} rejected, already face up", id);
            return TurnOutcome::NoChange;
        }

        card.revealed = true;
        self.timer_running = true;
        self.pending_selection.push(id);

        if self.pending_selection.len() < 2 {
            return TurnOutcome::Revealed;
        }

        self.moves += 1;
        self.resolution_lock = true;
        log::debug!(
            "move {}: pair {:?} selected",
            self.moves,
            self.pending_selection.as_slice()
        );
        TurnOutcome::PairSelected
    }

    pub fn resolve(&mut self) -> TurnOutcome {
        let [first, second] = match self.pending_selection.as_slice() {
            &[first, second] if self.resolution_lock => [first, second],
            _ => return TurnOutcome::NoChange,
        };
        let is_match = self.deck[first].symbol == self.deck[second].symbol;

        let cards = self.deck.cards_mut();
        for id in [first, second] {
            let card = &mut cards[usize::from(id)];
            if is_match {
                card.matched = true;
            } else {
                card.revealed = false;
            }
        }
        self.pending_selection.clear();
        self.resolution_lock = false;

        if !is_match {
            log::debug!("cards {} and {} do not match", first, second);
            return TurnOutcome::Mismatched;
        }

        self.matched_pairs += 1;
        log::debug!(
            "cards {} and {} match, {}/{} pairs",
            first,
            second,
            self.matched_pairs,
            self.pair_count()
        );
        if self.is_won() {
            self.timer_running = false;
            log::debug!(
                "won in {} moves and {}s",
                self.moves,
                self.elapsed_seconds
            );
            TurnOutcome::Won
        } else {
            TurnOutcome::Matched
        }
    }

    pub fn tick(&mut self) -> TurnOutcome {
        if !self.timer_running {
            return TurnOutcome::NoChange;
        }
        self.elapsed_seconds += 1;
        log::trace!("tick {}", self.elapsed_seconds);
        TurnOutcome::Ticked
    }
}

/// Pure form of [`GameState::apply`].
pub fn reduce(state: &GameState, action: Action) -> GameState {
    let mut next = state.clone();
    next.apply(action);
    next
}
