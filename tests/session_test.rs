//! Session driving and the score hand-off.

use std::time::Duration;

use flappy_board::core::{Board, ScriptedDice};
use flappy_board::engine::{Autopilot, Session, TickClock};
use flappy_board::scores::{Highscore, HighscoreList, ScoreStore};
use flappy_board::types::BoardEvent;

/// Store that remembers every submission
#[derive(Debug, Default)]
struct Recorder {
    submitted: Vec<Highscore>,
}

impl ScoreStore for Recorder {
    fn submit(&mut self, entry: Highscore) -> bool {
        self.submitted.push(entry);
        true
    }

    fn best(&self) -> Option<&Highscore> {
        self.submitted.iter().max_by_key(|h| h.score)
    }
}

fn play_out<S: ScoreStore>(session: &mut Session<S>) {
    let frame = Duration::from_millis(16);
    let mut ignore = |_: BoardEvent| {};
    session.flap();
    while !session.is_over() {
        session.update(frame, &mut ignore);
    }
}

#[test]
fn game_over_hands_score_off_exactly_once() {
    let mut session = Session::new(5, Recorder::default()).with_username("kev");
    play_out(&mut session);

    // Keep feeding time after the end
    let mut ignore = |_: BoardEvent| {};
    for _ in 0..10 {
        assert_eq!(session.update(Duration::from_millis(100), &mut ignore), 0);
    }
    assert!(!session.step());

    let store = session.into_store();
    assert_eq!(store.submitted.len(), 1);
    assert_eq!(store.submitted[0].username, "kev");
}

#[test]
fn restart_submits_again_for_the_new_game() {
    let mut session = Session::new(5, Recorder::default());
    play_out(&mut session);
    let first = session.result().map(|r| r.score);

    session.restart(6);
    assert!(session.result().is_none());
    play_out(&mut session);

    let store = session.into_store();
    assert_eq!(store.submitted.len(), 2);
    assert_eq!(Some(store.submitted[0].score), first);
}

#[test]
fn hall_of_fame_keeps_the_best_across_sessions() {
    let mut hof = HighscoreList::new();

    for seed in 0..5 {
        let mut session = Session::new(seed, &mut hof).with_username(format!("p{seed}"));
        play_out(&mut session);
    }

    let best = hof.best().cloned().expect("at least one record");
    assert_eq!(hof.len(), 1);
    assert!(hof.summary().starts_with(&format!("HOF: {}", best.score)));
}

#[test]
fn autopilot_session_scores_on_a_fixed_course() {
    let board = Board::with_dice(ScriptedDice::new());
    let mut session = Session::with_board(board, HighscoreList::new())
        .with_clock(TickClock::new().with_max_catch_up(5));
    let pilot = Autopilot::new();
    let mut changes = 0u32;
    let mut count = |e: BoardEvent| {
        if e == BoardEvent::BoardChanged {
            changes += 1;
        }
    };

    let mut ticks = 0;
    while ticks < 600 {
        if let Some(direction) = pilot.decide(session.board()) {
            session.input(direction);
        }
        ticks += session.update(Duration::from_micros(16_666), &mut count);
    }

    assert!(!session.is_over());
    assert_eq!(changes, ticks);
    assert!(session.board().score() >= 9);
}
