use memorou_core::*;

fn fixed_session(layout: &str) -> (ManualScheduler, GameSession<ManualScheduler>) {
    let symbols: Vec<_> = layout.chars().map(Symbol).collect();
    let deck = Deck::from_symbols(&symbols).unwrap();
    let state = GameState::new(Difficulty::Easy.config(), deck);
    let scheduler = ManualScheduler::new();
    let session = GameSession::from_state(scheduler.clone(), ShuffledDeckGenerator::new(1), state);
    (scheduler, session)
}

fn advance(scheduler: &ManualScheduler, session: &mut GameSession<ManualScheduler>, ms: u32) {
    scheduler.advance(ms, |event| {
        session.handle_event(event);
    });
}

#[test]
fn easy_scenario_match_then_mismatch() {
    let (scheduler, mut session) = fixed_session("ABACBC");

    assert_eq!(session.flip(0), TurnOutcome::Revealed);
    assert_eq!(session.state().pending_selection(), &[0]);

    assert_eq!(session.flip(2), TurnOutcome::PairSelected);
    assert_eq!(session.state().moves(), 1);
    assert!(session.state().is_input_locked());

    advance(&scheduler, &mut session, RESOLVE_DELAY_MS - 1);
    assert!(session.state().is_input_locked());
    assert!(!session.state().cards()[0].matched);

    advance(&scheduler, &mut session, 1);
    let state = session.state();
    assert!(state.cards()[0].matched && state.cards()[2].matched);
    assert_eq!(state.matched_pairs(), 1);
    assert!(!state.is_input_locked());

    assert_eq!(session.flip(1), TurnOutcome::Revealed);
    assert_eq!(session.state().pending_selection(), &[1]);
    assert_eq!(session.flip(3), TurnOutcome::PairSelected);
    assert_eq!(session.state().moves(), 2);

    advance(&scheduler, &mut session, RESOLVE_DELAY_MS);
    let state = session.state();
    assert!(!state.cards()[1].revealed && !state.cards()[3].revealed);
    assert!(!state.cards()[1].matched && !state.cards()[3].matched);
    assert_eq!(state.matched_pairs(), 1);
    assert!(state.pending_selection().is_empty());
}

#[test]
fn flips_during_resolution_are_rejected_not_queued() {
    let (scheduler, mut session) = fixed_session("ABACBC");
    session.flip(1);
    session.flip(3);

    let before = session.state().clone();
    assert_eq!(session.flip(5), TurnOutcome::NoChange);
    assert_eq!(session.state(), &before);

    advance(&scheduler, &mut session, RESOLVE_DELAY_MS);
    assert!(!session.state().cards()[5].revealed);
    assert!(session.state().pending_selection().is_empty());
}

#[test]
fn matched_cards_cannot_be_flipped_again() {
    let (scheduler, mut session) = fixed_session("ABACBC");
    session.flip(0);
    session.flip(2);
    advance(&scheduler, &mut session, RESOLVE_DELAY_MS);

    let before = session.state().clone();
    assert_eq!(session.flip(0), TurnOutcome::NoChange);
    assert_eq!(session.flip(2), TurnOutcome::NoChange);
    assert_eq!(session.state(), &before);
}

#[test]
fn clock_counts_seconds_from_first_flip() {
    let (scheduler, mut session) = fixed_session("ABACBC");

    advance(&scheduler, &mut session, 5_000);
    assert_eq!(session.state().elapsed_seconds(), 0);

    session.flip(0);
    advance(&scheduler, &mut session, 3_500);
    assert_eq!(session.state().elapsed_seconds(), 3);
}

#[test]
fn win_stops_the_clock() {
    let (scheduler, mut session) = fixed_session("ABACBC");

    for (a, b) in [(0, 2), (1, 4), (3, 5)] {
        session.flip(a);
        session.flip(b);
        advance(&scheduler, &mut session, 1_000);
    }

    let state = session.state();
    assert!(state.is_won());
    assert!(!state.is_timer_running());
    let elapsed = state.elapsed_seconds();
    assert_eq!(elapsed, 2);

    advance(&scheduler, &mut session, 10_000);
    assert_eq!(session.state().elapsed_seconds(), elapsed);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(session.state().rating(), 3);
}

#[test]
fn restart_to_hard_yields_fresh_game_without_old_timers() {
    let (scheduler, mut session) = fixed_session("ABACBC");
    session.flip(0);
    advance(&scheduler, &mut session, 2_000);
    session.flip(1);
    assert!(session.state().is_input_locked());

    let state = session.restart(Difficulty::Hard.config());
    assert_eq!(state.cards().len(), 24);
    assert_eq!(state.pair_count(), 12);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.matched_pairs(), 0);
    assert_eq!(state.elapsed_seconds(), 0);
    assert!(state.pending_selection().is_empty());
    assert!(!state.is_input_locked());
    assert!(!state.is_timer_running());
    assert!(state.cards().iter().all(|card| !card.revealed && !card.matched));
    assert_eq!(scheduler.pending(), 0);

    let before = session.state().clone();
    advance(&scheduler, &mut session, 10_000);
    assert_eq!(session.state(), &before);
}

#[test]
fn restart_mid_resolution_does_not_leak_into_new_game() {
    let (scheduler, mut session) = fixed_session("ABACBC");
    session.flip(0);
    session.flip(2);
    let stale = ScheduledEvent {
        session: session.session_id(),
        kind: TimerKind::Resolve,
    };

    session.restart(Difficulty::Easy.config());
    assert_eq!(session.flip(0), TurnOutcome::Revealed);
    assert_eq!(session.flip(1), TurnOutcome::PairSelected);

    assert_eq!(session.handle_event(stale), TurnOutcome::NoChange);
    assert!(session.state().is_input_locked());

    advance(&scheduler, &mut session, RESOLVE_DELAY_MS);
    assert!(!session.state().is_input_locked());
}

#[test]
fn snapshot_serializes_rendering_fields() {
    let (_scheduler, mut session) = fixed_session("ABACBC");
    session.flip(4);

    let json = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(json["cards"].as_array().unwrap().len(), 6);
    assert_eq!(json["cards"][4]["symbol"], "B");
    assert_eq!(json["cards"][4]["revealed"], true);
    assert_eq!(json["pair_count"], 3);
    assert_eq!(json["is_input_locked"], false);
    assert!(json["stars"].is_null());
}

#[test]
fn pure_reduce_matches_session_flow() {
    let symbols: Vec<_> = "ABACBC".chars().map(Symbol).collect();
    let start = GameState::new(
        Difficulty::Easy.config(),
        Deck::from_symbols(&symbols).unwrap(),
    );

    let end = [
        Action::Flip(0),
        Action::Flip(2),
        Action::Tick,
        Action::Resolve,
    ]
    .into_iter()
    .fold(start.clone(), |state, action| reduce(&state, action));

    assert_eq!(end.moves(), 1);
    assert_eq!(end.matched_pairs(), 1);
    assert_eq!(end.elapsed_seconds(), 1);
    assert!(!start.is_timer_running());
}

#[test]
fn dropping_session_cancels_clock_and_resolution() {
    let scheduler = ManualScheduler::new();
    let mut session = GameSession::new(scheduler.clone(), Difficulty::Easy.config(), 1);
    session.flip(0);
    session.flip(1);
    assert_eq!(scheduler.pending(), 2);

    drop(session);

    assert_eq!(scheduler.pending(), 0);
    let mut fired = 0;
    scheduler.advance(10_000, |_| fired += 1);
    assert_eq!(fired, 0);
}
