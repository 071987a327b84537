use serde::{Deserialize, Serialize};

use crate::BALLS_PER_OVER;

/// Team aggregate for the innings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Score {
    pub runs: u32,
    pub wickets: u32,
    /// Completed overs.
    pub overs: u32,
    /// Legal balls bowled in the current over, always in `0..6`.
    pub balls: u32,
}

impl Score {
    /// Legal balls bowled in the innings.
    pub fn total_balls(&self) -> u32 {
        self.overs * BALLS_PER_OVER + self.balls
    }

    /// Roll the over once the sixth legal ball has been bowled.
    ///
    /// Returns `true` when an over was completed.
    pub fn complete_over_if_due(&mut self) -> bool {
        if self.balls < BALLS_PER_OVER {
            return false;
        }
        self.overs += 1;
        self.balls = 0;
        true
    }

    /// Cricket overs notation, e.g. `4.2`.
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.overs, self.balls)
    }

    /// `runs/wickets`, e.g. `87/3`.
    pub fn score_line(&self) -> String {
        format!("{}/{}", self.runs, self.wickets)
    }
}
