//! The single persisted unit: everything needed to resume an innings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Ball, Batsman, Batsmen, Score};

/// Lifecycle of the match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    #[default]
    Setup,
    Batting,
    /// Reserved for a second innings; no transition reaches it yet.
    InningsBreak,
    Completed,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Setup => "setup",
            MatchStatus::Batting => "batting",
            MatchStatus::InningsBreak => "innings-break",
            MatchStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-state of a batting innings that gates scoring input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum InningsPhase {
    /// Ready for the next delivery.
    #[default]
    Idle,
    /// A wicket or run-out was recorded; it applies once the incoming
    /// batsman is named.
    AwaitingReplacement(Ball),
    /// The sixth legal ball was bowled; the operator must continue or end.
    OverComplete,
}

impl InningsPhase {
    pub fn pending_ball(&self) -> Option<&Ball> {
        match self {
            InningsPhase::AwaitingReplacement(ball) => Some(ball),
            _ => None,
        }
    }
}

/// Whole match snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub batsmen: Batsmen,
    pub score: Score,
    /// Every applied delivery, in order.
    pub ball_log: Vec<Ball>,
    /// Deliveries since the last over reset; always a suffix of `ball_log`.
    pub current_over: Vec<Ball>,
    pub match_status: MatchStatus,
    pub innings: u32,
    #[serde(default)]
    pub phase: InningsPhase,
    /// Frozen figures of dismissed batsmen, in order of dismissal.
    #[serde(default)]
    pub dismissed: Vec<Batsman>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Initial `setup` state with blank batsmen.
    pub fn new() -> Self {
        Self {
            batsmen: Batsmen::default(),
            score: Score::default(),
            ball_log: Vec::new(),
            current_over: Vec::new(),
            match_status: MatchStatus::Setup,
            innings: 1,
            phase: InningsPhase::Idle,
            dismissed: Vec::new(),
        }
    }

    pub fn striker(&self) -> &Batsman {
        &self.batsmen.striker
    }

    pub fn non_striker(&self) -> &Batsman {
        &self.batsmen.non_striker
    }

    pub fn is_awaiting_replacement(&self) -> bool {
        matches!(self.phase, InningsPhase::AwaitingReplacement(_))
    }

    pub fn is_over_complete(&self) -> bool {
        matches!(self.phase, InningsPhase::OverComplete)
    }

    /// Whether a delivery may be recorded right now.
    pub fn accepts_delivery(&self) -> bool {
        self.match_status == MatchStatus::Batting && self.phase == InningsPhase::Idle
    }
}
