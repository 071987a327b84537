//! # cric_core - Ball-by-Ball Innings Scorer
//!
//! This library holds the scoring state machine for a single two-batsman
//! innings, the statistics derived from it, and the snapshot persistence
//! that keeps one active match alive between sessions.
//!
//! ## Features
//! - Explicit two-phase wicket handling (`AwaitingReplacement`)
//! - Over boundary gate with continue / end innings decision
//! - Strike rate and current run rate
//! - JSON or packed (MessagePack + LZ4 + SHA-256) snapshots behind an
//!   injected [`SnapshotStore`]

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod save;
pub mod scorer;
pub mod session;
pub mod stats;
pub mod summary;

pub use config::{ConfigError, ScorerConfig};
pub use error::{InputError, Result, ScoringError};
pub use input::{coerce_runs, OperatorCommand};
pub use models::{
    Ball, Batsman, Batsmen, DeliveryKind, InningsPhase, MatchState, MatchStatus, Score,
};
pub use save::{
    FileSnapshotStore, InMemorySnapshotStore, SaveError, SnapshotFormat, SnapshotStore,
};
pub use scorer::DeliveryOutcome;
pub use session::{MatchSession, SessionError};
pub use stats::{current_run_rate, strike_rate};
pub use summary::InningsSummary;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key the active match snapshot is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "cricketMatch";

/// Legal deliveries per over.
pub const BALLS_PER_OVER: u32 = 6;
