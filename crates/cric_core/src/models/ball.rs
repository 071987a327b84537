use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome category of a single delivery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryKind {
    Normal,
    Wide,
    NoBall,
    Wicket,
    RunOut,
}

impl DeliveryKind {
    /// Counted deliveries consume one of the six legal balls of an over.
    pub fn is_counted(self) -> bool {
        matches!(self, DeliveryKind::Normal | DeliveryKind::Wicket | DeliveryKind::RunOut)
    }

    /// Wickets and run-outs need an incoming batsman before they apply.
    pub fn is_dismissal(self) -> bool {
        matches!(self, DeliveryKind::Wicket | DeliveryKind::RunOut)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryKind::Normal => "normal",
            DeliveryKind::Wide => "wide",
            DeliveryKind::NoBall => "noball",
            DeliveryKind::Wicket => "wicket",
            DeliveryKind::RunOut => "runout",
        }
    }
}

impl fmt::Display for DeliveryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of one delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ball {
    /// 1-based position within the over; only counted deliveries advance it,
    /// so a wide or no-ball repeats the number of the last legal ball.
    pub ball_number: u32,
    /// 1-based over number.
    pub over_number: u32,
    /// Runs off the bat (or run in a run-out).
    pub runs: u32,
    #[serde(rename = "type")]
    pub kind: DeliveryKind,
    /// Striker facing the delivery.
    pub batsman: String,
    /// Runs awarded to the team but not to the striker.
    #[serde(default)]
    pub extras: u32,
    /// Incoming batsman, set once a wicket or run-out is confirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_batsman: Option<String>,
}

impl Ball {
    /// Runs this delivery adds to the team total when it applies.
    pub fn team_runs(&self) -> u32 {
        self.runs.saturating_add(self.extras)
    }

    /// Label used in the ball-by-ball log.
    pub fn log_label(&self) -> String {
        match self.kind {
            DeliveryKind::Wicket => "W".to_string(),
            DeliveryKind::RunOut => format!("RO+{}", self.runs),
            DeliveryKind::Wide => format!("Wd+{}", self.runs),
            DeliveryKind::NoBall => format!("Nb+{}", self.runs),
            DeliveryKind::Normal => self.runs.to_string(),
        }
    }

    /// Short chip shown in the current-over strip.
    pub fn over_chip(&self) -> String {
        match self.kind {
            DeliveryKind::Wicket => "W".to_string(),
            DeliveryKind::RunOut => "RO".to_string(),
            DeliveryKind::Wide => "Wd".to_string(),
            DeliveryKind::NoBall => "Nb".to_string(),
            DeliveryKind::Normal => self.runs.to_string(),
        }
    }
}
