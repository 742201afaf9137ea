//! Game session - one board driven by a clock, with a score hand-off.
//!
//! A session only ticks its board once the player has started it (first
//! flap). When the board reports game over the final score is offered to the
//! [`ScoreStore`] exactly once. `restart` throws the board away and builds a
//! fresh one.

use std::time::Duration;

use log::info;

use flappy_board_core::types::Direction;
use flappy_board_core::{Board, BoardListener, Dice, GameDice};
use flappy_board_scores::{Highscore, ScoreStore};

use crate::clock::TickClock;

/// Name submitted when none is configured
pub const DEFAULT_USERNAME: &str = "player";

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub score: u32,
    pub ticks: u64,
    /// Whether the store recorded the score
    pub recorded: bool,
}

#[derive(Debug)]
pub struct Session<S: ScoreStore, D: Dice = GameDice> {
    board: Board<D>,
    clock: TickClock,
    store: S,
    username: String,
    result: Option<GameResult>,
    games: u32,
}

impl<S: ScoreStore> Session<S, GameDice> {
    pub fn new(seed: u64, store: S) -> Self {
        Self::with_board(Board::new(seed), store)
    }

    /// Start over with a fresh board seeded from `seed`
    pub fn restart(&mut self, seed: u64) {
        self.restart_with(Board::new(seed));
    }
}

impl<S: ScoreStore, D: Dice> Session<S, D> {
    pub fn with_board(board: Board<D>, store: S) -> Self {
        Self {
            board,
            clock: TickClock::new(),
            store,
            username: DEFAULT_USERNAME.to_string(),
            result: None,
            games: 1,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_clock(mut self, clock: TickClock) -> Self {
        self.clock = clock;
        self
    }

    /// Forward player input to the board
    pub fn input(&mut self, direction: Direction) {
        self.board.move_bird(direction);
    }

    pub fn flap(&mut self) {
        self.input(Direction::Up);
    }

    /// Run one board tick if the game is live.
    ///
    /// Returns `false` before the first flap and after game over.
    pub fn step(&mut self) -> bool {
        if !self.board.running() || self.board.game_over() {
            return false;
        }
        self.board.tick();
        if self.board.game_over() {
            self.finish();
        }
        true
    }

    /// Run every tick that `elapsed` wall-clock time makes due, draining the
    /// board's events into `listener` after each one.
    ///
    /// Returns the number of ticks run.
    pub fn update<L: BoardListener + ?Sized>(&mut self, elapsed: Duration, listener: &mut L) -> u32 {
        if !self.board.running() || self.board.game_over() {
            self.clock.reset();
            return 0;
        }
        let due = self.clock.advance(elapsed);
        let mut ran = 0;
        for _ in 0..due {
            if !self.step() {
                break;
            }
            self.board.notify(listener);
            ran += 1;
        }
        ran
    }

    fn finish(&mut self) {
        if self.result.is_some() {
            return;
        }
        let score = self.board.score();
        let recorded = self
            .store
            .submit(Highscore::new(score, self.username.clone()));
        info!(
            "game {} over: score={} ticks={} recorded={}",
            self.games,
            score,
            self.board.tick_count(),
            recorded
        );
        self.result = Some(GameResult {
            score,
            ticks: self.board.tick_count(),
            recorded,
        });
    }

    /// Replace the board with `board` and clear the finished-game state
    pub fn restart_with(&mut self, board: Board<D>) {
        self.board = board;
        self.clock.reset();
        self.result = None;
        self.games += 1;
        info!("session restart, game {}", self.games);
    }

    pub fn board(&self) -> &Board<D> {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Result of the current game once it is over
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.board.game_over()
    }

    /// Games played, counting the current one
    pub fn games(&self) -> u32 {
        self.games
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy_board_core::types::BoardEvent;
    use flappy_board_core::ScriptedDice;
    use flappy_board_scores::HighscoreList;

    fn scripted(store: HighscoreList) -> Session<HighscoreList, ScriptedDice> {
        Session::with_board(Board::with_dice(ScriptedDice::new()), store)
    }

    #[test]
    fn test_no_ticks_before_first_flap() {
        let mut session = scripted(HighscoreList::new());
        assert!(!session.step());
        let mut sink = |_: BoardEvent| {};
        assert_eq!(session.update(Duration::from_secs(1), &mut sink), 0);
        assert_eq!(session.board().tick_count(), 0);
    }

    #[test]
    fn test_update_runs_due_ticks() {
        let mut session = scripted(HighscoreList::new());
        session.flap();

        let mut changes = 0;
        let mut count = |e: BoardEvent| {
            if e == BoardEvent::BoardChanged {
                changes += 1;
            }
        };
        assert_eq!(session.update(Duration::from_millis(50), &mut count), 3);
        assert_eq!(changes, 3);
        assert_eq!(session.board().tick_count(), 3);
    }

    #[test]
    fn test_score_handed_off_once() {
        let mut session = scripted(HighscoreList::new()).with_username("ada");
        session.flap();
        while session.step() {}

        let result = session.result().expect("game finished");
        assert!(result.recorded);
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.store().records()[0].username, "ada");

        // Further steps do nothing and never resubmit
        assert!(!session.step());
        assert_eq!(session.result(), Some(result));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_empty_username_is_not_recorded() {
        let mut session = scripted(HighscoreList::new()).with_username("");
        session.flap();
        while session.step() {}
        assert_eq!(session.result().map(|r| r.recorded), Some(false));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_restart_builds_fresh_board() {
        let mut session = Session::new(7, HighscoreList::new());
        session.flap();
        while session.step() {}
        assert!(session.is_over());

        session.restart(8);
        assert!(!session.is_over());
        assert!(!session.board().running());
        assert_eq!(session.board().score(), 0);
        assert_eq!(session.board().tick_count(), 0);
        assert_eq!(session.result(), None);
        assert_eq!(session.games(), 2);
    }
}
