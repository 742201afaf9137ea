//! Hall of fame - the score hand-off target of a finished game
//!
//! The board only produces a final score. What happens to it afterwards lives
//! here: [`ScoreStore`] is the seam a session submits to, and [`HighscoreList`]
//! is the reference store. It keeps a single record and replaces it only when
//! a strictly greater score arrives with a non-empty username.
//!
//! Records serialize as an ordered JSON array of `{ "score", "username" }`
//! objects, so a list can be persisted by whoever owns the I/O.
//!
//! ```
//! use flappy_board_scores::{Highscore, HighscoreList, ScoreStore};
//!
//! let mut hof = HighscoreList::new();
//! assert!(hof.submit(Highscore::new(12, "ada")));
//! assert!(!hof.submit(Highscore::new(12, "bob")));
//! assert_eq!(hof.summary(), "HOF: 12       ada");
//! ```

use log::info;
use serde::{Deserialize, Serialize};

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Highscore {
    pub score: u32,
    #[serde(default)]
    pub username: String,
}

impl Highscore {
    pub fn new(score: u32, username: impl Into<String>) -> Self {
        Self {
            score,
            username: username.into(),
        }
    }

    /// A score with no name attached yet
    pub fn anonymous(score: u32) -> Self {
        Self::new(score, "")
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }
}

/// Receiver of final scores
pub trait ScoreStore {
    /// Offer a finished game. Returns `true` if it was recorded.
    fn submit(&mut self, entry: Highscore) -> bool;

    /// Best recorded game, if any
    fn best(&self) -> Option<&Highscore>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn submit(&mut self, entry: Highscore) -> bool {
        (**self).submit(entry)
    }

    fn best(&self) -> Option<&Highscore> {
        (**self).best()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighscoreList {
    records: Vec<Highscore>,
}

impl HighscoreList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from previously persisted records
    pub fn from_records(records: Vec<Highscore>) -> Self {
        Self { records }
    }

    /// Whether `entry` would beat the current record.
    ///
    /// An empty list accepts anything.
    pub fn is_new_highscore(&self, entry: &Highscore) -> bool {
        match self.records.first() {
            None => true,
            Some(first) => first.score < entry.score,
        }
    }

    /// Replace the current record with `entry`
    pub fn add(&mut self, entry: Highscore) {
        match self.records.first_mut() {
            Some(current) => *current = entry,
            None => self.records.push(entry),
        }
    }

    pub fn records(&self) -> &[Highscore] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One-line hall of fame banner
    pub fn summary(&self) -> String {
        match self.records.first() {
            Some(best) => format!("HOF: {}       {}", best.score, best.username),
            None => "HOF: -".to_string(),
        }
    }
}

impl ScoreStore for HighscoreList {
    fn submit(&mut self, entry: Highscore) -> bool {
        if entry.username.is_empty() || !self.is_new_highscore(&entry) {
            return false;
        }
        info!("new high score {} by {}", entry.score, entry.username);
        self.add(entry);
        true
    }

    fn best(&self) -> Option<&Highscore> {
        self.records.first()
    }
}
