//! Process-scoped top score
//!
//! A single best-score scalar carried across rounds for the lifetime of the
//! process. The session reads it on the title screen and writes it at game
//! over. Nothing touches disk; quitting discards it.

use serde::{Deserialize, Serialize};

/// Best score seen so far this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopScore {
    best: u32,
}

impl TopScore {
    pub fn new() -> Self {
        Self { best: 0 }
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    /// Whether `score` would become the new top score.
    pub fn beats(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished round. Returns true when it set a new top score.
    pub fn record(&mut self, score: u32) -> bool {
        if self.beats(score) {
            self.best = score;
            true
        } else {
            false
        }
    }
}
