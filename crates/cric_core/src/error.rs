use thiserror::Error;

/// Precondition violations raised by the innings scorer.
///
/// Every variant leaves the [`MatchState`](crate::MatchState) exactly as it
/// was before the call; the operator simply retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Batsman name must not be blank ({role})")]
    BlankName { role: &'static str },

    #[error("Match already started (status: {status})")]
    NotInSetup { status: String },

    #[error("Scoring is not open (status: {status})")]
    NotBatting { status: String },

    #[error("A wicket is awaiting the incoming batsman")]
    ReplacementPending,

    #[error("Over complete: choose to continue or end the innings")]
    OverDecisionPending,

    #[error("No wicket or run-out is awaiting a replacement")]
    NoPendingWicket,

    #[error("No over boundary is awaiting a decision")]
    NoOverBoundary,
}

/// Rejected operator input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid run value: {0}")]
    InvalidRuns(String),

    #[error("Runs off the bat must be one of 0, 1, 2, 3, 4, 6 (got {0})")]
    UnsupportedRuns(u32),

    #[error("Run entry {runs} is above the limit of {max}")]
    RunsOutOfRange { runs: u32, max: u32 },

    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
