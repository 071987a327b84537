use serde::{Deserialize, Serialize};

/// Individual batting figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Batsman {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub is_out: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_out: Option<String>,
}

impl Batsman {
    /// Fresh batsman with zeroed figures.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Credit one faced legal ball and the runs hit off it.
    pub fn face(&mut self, runs: u32) {
        self.runs = self.runs.saturating_add(runs);
        self.balls += 1;
        match runs {
            4 => self.fours += 1,
            6 => self.sixes += 1,
            _ => {}
        }
    }

    /// Freeze this record as dismissed.
    pub fn dismiss(&mut self, how_out: impl Into<String>) {
        self.is_out = true;
        self.how_out = Some(how_out.into());
    }
}

/// The pair at the crease.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Batsmen {
    pub striker: Batsman,
    pub non_striker: Batsman,
}

impl Batsmen {
    pub fn new(striker: impl Into<String>, non_striker: impl Into<String>) -> Self {
        Self { striker: Batsman::new(striker), non_striker: Batsman::new(non_striker) }
    }

    /// Exchange striker and non-striker.
    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }
}
