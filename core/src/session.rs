use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a game handed to the rendering layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cards: Vec<Card>,
    pub columns: u8,
    pub moves: MoveCount,
    pub matched_pairs: PairCount,
    pub pair_count: PairCount,
    pub elapsed_seconds: Seconds,
    pub is_won: bool,
    pub is_input_locked: bool,
    /// Star tier, present once the game is won.
    pub stars: Option<u8>,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        let is_won = state.is_won();
        Self {
            cards: state.cards().to_vec(),
            columns: state.config().columns(),
            moves: state.moves(),
            matched_pairs: state.matched_pairs(),
            pair_count: state.pair_count(),
            elapsed_seconds: state.elapsed_seconds(),
            is_won,
            is_input_locked: state.is_input_locked(),
            stars: is_won.then(|| state.rating()),
        }
    }
}

/// Mutable holder that drives a [`GameState`] with real or virtual timers.
///
/// Owns the clock and the pending resolution of the current game. Both are
/// cancelled by dropping their handles, on win, restart, or when the session
/// itself is dropped.
#[derive(Debug)]
pub struct GameSession<S: Scheduler, G = ShuffledDeckGenerator> {
    scheduler: S,
    generator: G,
    session: SessionId,
    state: GameState,
    ticker: Option<S::Handle>,
    resolution: Option<S::Handle>,
}

impl<S: Scheduler> GameSession<S> {
    /// Starts a randomly dealt game.
    pub fn new(scheduler: S, config: DifficultyConfig, seed: u64) -> Self {
        Self::with_generator(scheduler, ShuffledDeckGenerator::new(seed), config)
    }
}

impl<S: Scheduler, G: DeckGenerator> GameSession<S, G> {
    pub fn with_generator(scheduler: S, mut generator: G, config: DifficultyConfig) -> Self {
        let state = GameState::deal(config, &mut generator);
        Self::from_state(scheduler, generator, state)
    }

    /// Resumes from an existing state, e.g. a fixed deal.
    pub fn from_state(scheduler: S, generator: G, state: GameState) -> Self {
        let mut session = Self {
            scheduler,
            generator,
            session: SessionId::default(),
            state,
            ticker: None,
            resolution: None,
        };
        session.sync_timers();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    pub fn flip(&mut self, id: CardId) -> TurnOutcome {
        let outcome = self.state.flip(id);
        if outcome.has_update() {
            self.sync_timers();
        }
        outcome
    }

    /// Applies a timer event; events from an earlier game are ignored.
    pub fn handle_event(&mut self, event: ScheduledEvent) -> TurnOutcome {
        if event.session != self.session {
            log::trace!("stale {:?} event from {:?} ignored", event.kind, event.session);
            return TurnOutcome::NoChange;
        }

        let outcome = match event.kind {
            TimerKind::Tick => self.state.tick(),
            TimerKind::Resolve => {
                // one-shot, already spent
                self.resolution = None;
                self.state.resolve()
            }
        };
        self.sync_timers();
        outcome
    }

    /// Throws the current game away and deals a new one for `config`.
    pub fn restart(&mut self, config: DifficultyConfig) -> &GameState {
        self.ticker = None;
        self.resolution = None;
        self.session = self.session.next();
        self.state = GameState::deal(config, &mut self.generator);
        log::debug!(
            "restarted as {:?} with {} pairs",
            self.session,
            self.state.pair_count()
        );
        &self.state
    }

    fn event(&self, kind: TimerKind) -> ScheduledEvent {
        ScheduledEvent {
            session: self.session,
            kind,
        }
    }

    fn sync_timers(&mut self) {
        if self.state.is_timer_running() {
            if self.ticker.is_none() {
                let event = self.event(TimerKind::Tick);
                self.ticker = Some(self.scheduler.schedule_recurring(TICK_INTERVAL_MS, event));
            }
        } else if self.ticker.take().is_some() {
            log::debug!("clock stopped at {}s", self.state.elapsed_seconds());
        }

        if self.state.is_input_locked() {
            if self.resolution.is_none() {
                let event = self.event(TimerKind::Resolve);
                self.resolution = Some(self.scheduler.schedule_once(RESOLVE_DELAY_MS, event));
            }
        } else {
            self.resolution = None;
        }
    }
}
