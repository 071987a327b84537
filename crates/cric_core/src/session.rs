//! Match session: the collaborator that owns the live [`MatchState`] and
//! persists it through an injected [`SnapshotStore`] after every change.

use thiserror::Error;
use tracing::{info, warn};

use crate::config::ScorerConfig;
use crate::error::{InputError, ScoringError};
use crate::input::OperatorCommand;
use crate::models::{DeliveryKind, MatchState, MatchStatus};
use crate::save::{decode_snapshot, encode_snapshot, SaveError, SnapshotFormat, SnapshotStore};
use crate::scorer::DeliveryOutcome;
use crate::stats;
use crate::summary::InningsSummary;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

pub struct MatchSession<S: SnapshotStore> {
    state: MatchState,
    store: S,
    storage_key: String,
    format: SnapshotFormat,
    strict_runs: bool,
}

impl<S: SnapshotStore> MatchSession<S> {
    /// Resume the stored match, or start from a blank setup state when
    /// nothing is stored under the configured key.
    pub fn open(store: S, config: &ScorerConfig) -> Result<Self, SessionError> {
        let state = match store.load(&config.storage_key)? {
            Some(bytes) => {
                let state = decode_snapshot(&bytes, config.format)?;
                info!(
                    key = %config.storage_key,
                    status = %state.match_status,
                    score = %state.score.score_line(),
                    "Resumed stored match"
                );
                state
            }
            None => MatchState::new(),
        };

        Ok(Self {
            state,
            store,
            storage_key: config.storage_key.clone(),
            format: config.format,
            strict_runs: config.strict_runs,
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse a console line with this session's run-entry policy.
    pub fn parse_command(&self, line: &str) -> Result<OperatorCommand, InputError> {
        OperatorCommand::parse(line, self.strict_runs)
    }

    pub fn start_match(&mut self, striker: &str, non_striker: &str) -> Result<(), SessionError> {
        self.mutate(|state| state.start_match(striker, non_striker))
    }

    pub fn record_delivery(
        &mut self,
        runs_off_bat: u32,
        kind: DeliveryKind,
        extras: u32,
    ) -> Result<DeliveryOutcome, SessionError> {
        self.mutate(|state| state.record_delivery(runs_off_bat, kind, extras))
    }

    pub fn confirm_replacement(&mut self, name: &str) -> Result<DeliveryOutcome, SessionError> {
        self.mutate(|state| state.confirm_replacement(name))
    }

    pub fn continue_innings(&mut self) -> Result<(), SessionError> {
        self.mutate(MatchState::continue_innings)
    }

    pub fn end_innings(&mut self) -> Result<(), SessionError> {
        self.mutate(MatchState::end_innings)
    }

    /// Discard the match and erase its stored snapshot.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.state.reset();
        let removed = self.store.remove(&self.storage_key)?;
        info!(key = %self.storage_key, removed, "Stored match erased");
        Ok(())
    }

    pub fn summary(&self) -> InningsSummary {
        InningsSummary::from_state(&self.state)
    }

    pub fn striker_strike_rate(&self) -> String {
        stats::strike_rate(self.state.striker())
    }

    pub fn non_striker_strike_rate(&self) -> String {
        stats::strike_rate(self.state.non_striker())
    }

    pub fn current_run_rate(&self) -> String {
        stats::current_run_rate(&self.state.score)
    }

    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut MatchState) -> Result<T, ScoringError>,
    ) -> Result<T, SessionError> {
        match op(&mut self.state) {
            Ok(value) => {
                self.persist()?;
                Ok(value)
            }
            Err(e) => {
                warn!(error = %e, "Operation refused");
                Err(e.into())
            }
        }
    }

    fn persist(&mut self) -> Result<(), SaveError> {
        if self.state.match_status == MatchStatus::Setup {
            return Ok(());
        }
        let bytes = encode_snapshot(&self.state, self.format)?;
        self.store.save(&self.storage_key, &bytes)
    }
}
