//! Post-innings summary view model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Batsman, MatchState};
use crate::stats::{current_run_rate, strike_rate};

/// One batting line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BattingLine {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: String,
    pub is_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_out: Option<String>,
}

impl From<&Batsman> for BattingLine {
    fn from(b: &Batsman) -> Self {
        Self {
            name: b.name.clone(),
            runs: b.runs,
            balls: b.balls,
            fours: b.fours,
            sixes: b.sixes,
            strike_rate: strike_rate(b),
            is_out: b.is_out,
            how_out: b.how_out.clone(),
        }
    }
}

/// One entry of the ball-by-ball log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BallLine {
    /// `over.ball`, e.g. `3.4`.
    pub position: String,
    pub batsman: String,
    pub label: String,
}

/// Final score, batting card and ball-by-ball log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InningsSummary {
    pub score: String,
    pub overs: String,
    pub run_rate: String,
    pub batting: Vec<BattingLine>,
    pub balls: Vec<BallLine>,
}

impl InningsSummary {
    pub fn from_state(state: &MatchState) -> Self {
        let batting = state
            .dismissed
            .iter()
            .chain([&state.batsmen.striker, &state.batsmen.non_striker])
            .map(BattingLine::from)
            .collect();

        let balls = state
            .ball_log
            .iter()
            .map(|ball| BallLine {
                position: format!("{}.{}", ball.over_number, ball.ball_number),
                batsman: ball.batsman.clone(),
                label: ball.log_label(),
            })
            .collect();

        Self {
            score: state.score.score_line(),
            overs: state.score.overs_display(),
            run_rate: current_run_rate(&state.score),
            batting,
            balls,
        }
    }
}

impl fmt::Display for InningsSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Final Score: {} ({} overs)", self.score, self.overs)?;
        writeln!(f, "Run Rate: {}", self.run_rate)?;
        writeln!(f)?;
        for line in &self.batting {
            let status = if line.is_out { "Out" } else { "Not Out" };
            writeln!(
                f,
                "{} [{}] {} runs ({} balls, {}x4, {}x6) SR {}",
                line.name, status, line.runs, line.balls, line.fours, line.sixes, line.strike_rate
            )?;
        }
        if !self.balls.is_empty() {
            writeln!(f)?;
            for ball in &self.balls {
                writeln!(f, "Over {}: {}  {}", ball.position, ball.batsman, ball.label)?;
            }
        }
        Ok(())
    }
}
