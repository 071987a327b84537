//! Match data model
//!
//! Plain serde types that make up the single persisted unit, [`MatchState`].
//! Field names follow the browser snapshot layout (camelCase) so a stored
//! match reads back verbatim.

pub mod ball;
pub mod batsman;
pub mod match_state;
pub mod score;

pub use ball::{Ball, DeliveryKind};
pub use batsman::{Batsman, Batsmen};
pub use match_state::{InningsPhase, MatchState, MatchStatus};
pub use score::Score;
