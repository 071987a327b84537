//! Innings scoring state machine
//!
//! Each operation validates its preconditions first and only then mutates,
//! so a refused call never leaves a partially applied delivery behind.
//!
//! ```text
//! setup ──start_match──▶ batting ──end_innings──▶ completed
//!                          │  ▲
//!        wicket / run-out  │  │ confirm_replacement
//!                          ▼  │
//!                 AwaitingReplacement
//!
//! sixth legal ball ─▶ OverComplete ─continue_innings─▶ Idle
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::{Result, ScoringError};
use crate::models::{Ball, Batsman, Batsmen, DeliveryKind, InningsPhase, MatchState, MatchStatus};

/// What happened to a recorded delivery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// Scoring applied; ready for the next ball.
    Applied,
    /// Wicket or run-out held until the incoming batsman is named.
    AwaitingReplacement,
    /// Scoring applied and the over just finished.
    OverComplete,
}

fn require_name<'a>(name: &'a str, role: &'static str) -> Result<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScoringError::BlankName { role });
    }
    Ok(name)
}

impl MatchState {
    /// Open the innings with the two opening batsmen.
    pub fn start_match(&mut self, striker: &str, non_striker: &str) -> Result<()> {
        if self.match_status != MatchStatus::Setup {
            return Err(ScoringError::NotInSetup { status: self.match_status.to_string() });
        }
        let striker = require_name(striker, "striker")?;
        let non_striker = require_name(non_striker, "non-striker")?;

        self.batsmen = Batsmen::new(striker, non_striker);
        self.match_status = MatchStatus::Batting;
        self.phase = InningsPhase::Idle;

        info!(striker, non_striker, "Match started");
        Ok(())
    }

    /// Record one delivery.
    ///
    /// Wickets and run-outs are held in [`InningsPhase::AwaitingReplacement`]
    /// and apply only through [`MatchState::confirm_replacement`]. Every
    /// other kind applies immediately.
    pub fn record_delivery(
        &mut self,
        runs_off_bat: u32,
        kind: DeliveryKind,
        extras: u32,
    ) -> Result<DeliveryOutcome> {
        self.ensure_scoring_open()?;

        let ball_number = if kind.is_counted() { self.score.balls + 1 } else { self.score.balls };
        let ball = Ball {
            ball_number,
            over_number: self.score.overs + 1,
            runs: runs_off_bat,
            kind,
            batsman: self.batsmen.striker.name.clone(),
            extras,
            new_batsman: None,
        };

        if kind.is_dismissal() {
            debug!(over = ball.over_number, ball = ball.ball_number, %kind, "Dismissal awaiting replacement");
            self.phase = InningsPhase::AwaitingReplacement(ball);
            return Ok(DeliveryOutcome::AwaitingReplacement);
        }

        self.score.runs = self.score.runs.saturating_add(ball.team_runs());

        if kind == DeliveryKind::Normal {
            self.batsmen.striker.face(runs_off_bat);
            self.score.balls += 1;

            if runs_off_bat % 2 == 1 {
                self.batsmen.swap_strike();
                trace!(striker = %self.batsmen.striker.name, "Strike rotated on odd runs");
            }
        }

        debug!(
            over = ball.over_number,
            ball = ball.ball_number,
            %kind,
            runs = ball.runs,
            extras = ball.extras,
            total = self.score.runs,
            "Delivery applied"
        );
        self.ball_log.push(ball.clone());
        self.current_over.push(ball);

        Ok(self.check_over_complete())
    }

    /// Apply the pending wicket or run-out and bring in `new_batsman` on
    /// strike.
    pub fn confirm_replacement(&mut self, new_batsman: &str) -> Result<DeliveryOutcome> {
        let InningsPhase::AwaitingReplacement(pending) = &self.phase else {
            return Err(ScoringError::NoPendingWicket);
        };
        let name = require_name(new_batsman, "incoming batsman")?;

        let mut ball = pending.clone();
        ball.new_batsman = Some(name.to_string());

        // Run-out runs are team runs only; nobody's personal tally moves.
        self.score.runs = self.score.runs.saturating_add(ball.runs);
        self.score.wickets += 1;
        self.score.balls += 1;

        let how_out = match ball.kind {
            DeliveryKind::RunOut => "run out",
            _ => "out",
        };
        let mut outgoing = std::mem::replace(&mut self.batsmen.striker, Batsman::new(name));
        outgoing.dismiss(how_out);
        info!(
            outgoing = %outgoing.name,
            incoming = name,
            wickets = self.score.wickets,
            "Wicket confirmed"
        );
        self.dismissed.push(outgoing);

        self.ball_log.push(ball.clone());
        self.current_over.push(ball);
        self.phase = InningsPhase::Idle;

        Ok(self.check_over_complete())
    }

    /// Resume after an over boundary.
    pub fn continue_innings(&mut self) -> Result<()> {
        if !self.is_over_complete() {
            return Err(ScoringError::NoOverBoundary);
        }
        self.current_over.clear();
        self.phase = InningsPhase::Idle;
        debug!(over = self.score.overs + 1, "Next over");
        Ok(())
    }

    /// Close the innings at an over boundary; scoring is frozen afterwards.
    pub fn end_innings(&mut self) -> Result<()> {
        if !self.is_over_complete() {
            return Err(ScoringError::NoOverBoundary);
        }
        self.current_over.clear();
        self.phase = InningsPhase::Idle;
        self.match_status = MatchStatus::Completed;
        info!(score = %self.score.score_line(), overs = %self.score.overs_display(), "Innings completed");
        Ok(())
    }

    /// Discard everything and return to the initial setup state.
    pub fn reset(&mut self) {
        *self = MatchState::new();
        info!("Match reset");
    }

    fn ensure_scoring_open(&self) -> Result<()> {
        if self.match_status != MatchStatus::Batting {
            return Err(ScoringError::NotBatting { status: self.match_status.to_string() });
        }
        match self.phase {
            InningsPhase::Idle => Ok(()),
            InningsPhase::AwaitingReplacement(_) => Err(ScoringError::ReplacementPending),
            InningsPhase::OverComplete => Err(ScoringError::OverDecisionPending),
        }
    }

    /// End-of-over rotation runs after, and independently of, any odd-run
    /// swap on the same ball.
    fn check_over_complete(&mut self) -> DeliveryOutcome {
        if !self.score.complete_over_if_due() {
            return DeliveryOutcome::Applied;
        }
        self.batsmen.swap_strike();
        trace!(striker = %self.batsmen.striker.name, "Strike rotated at end of over");

        self.phase = InningsPhase::OverComplete;
        info!(overs = self.score.overs, score = %self.score.score_line(), "Over complete");
        DeliveryOutcome::OverComplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batting(striker: &str, non_striker: &str) -> MatchState {
        let mut state = MatchState::new();
        state.start_match(striker, non_striker).unwrap();
        state
    }

    fn normal(state: &mut MatchState, runs: u32) -> DeliveryOutcome {
        state.record_delivery(runs, DeliveryKind::Normal, 0).unwrap()
    }

    #[test]
    fn test_start_match_requires_names() {
        let mut state = MatchState::new();
        assert_eq!(
            state.start_match("", "B"),
            Err(ScoringError::BlankName { role: "striker" })
        );
        assert_eq!(
            state.start_match("A", "   "),
            Err(ScoringError::BlankName { role: "non-striker" })
        );
        assert_eq!(state, MatchState::new());

        state.start_match("A", "B").unwrap();
        assert_eq!(state.match_status, MatchStatus::Batting);
        assert_eq!(state.striker().name, "A");
        assert_eq!(state.non_striker().name, "B");

        assert!(matches!(state.start_match("C", "D"), Err(ScoringError::NotInSetup { .. })));
    }

    #[test]
    fn test_delivery_refused_before_start() {
        let mut state = MatchState::new();
        let err = state.record_delivery(1, DeliveryKind::Normal, 0).unwrap_err();
        assert_eq!(err, ScoringError::NotBatting { status: "setup".to_string() });
    }

    #[test]
    fn test_single_rotates_strike() {
        let mut state = batting("A", "B");
        assert_eq!(normal(&mut state, 1), DeliveryOutcome::Applied);

        assert_eq!(state.striker().name, "B");
        let a = state.non_striker();
        assert_eq!(a.name, "A");
        assert_eq!(a.balls, 1);
        assert_eq!(a.runs, 1);
        assert_eq!(state.score.runs, 1);
        assert_eq!(state.score.balls, 1);
        assert_eq!(state.ball_log.len(), 1);
        assert_eq!(state.current_over.len(), 1);
    }

    #[test]
    fn test_even_runs_keep_strike() {
        let mut state = batting("A", "B");
        for runs in [0, 2, 4, 6] {
            normal(&mut state, runs);
            assert_eq!(state.striker().name, "A");
        }
        let a = state.striker();
        assert_eq!(a.runs, 12);
        assert_eq!(a.fours, 1);
        assert_eq!(a.sixes, 1);
        assert_eq!(a.balls, 4);
    }

    #[test]
    fn test_maiden_over_completes() {
        let mut state = batting("A", "B");
        for _ in 0..5 {
            assert_eq!(normal(&mut state, 0), DeliveryOutcome::Applied);
        }
        assert_eq!(normal(&mut state, 0), DeliveryOutcome::OverComplete);

        assert_eq!(state.score.overs, 1);
        assert_eq!(state.score.balls, 0);
        assert_eq!(state.striker().name, "B");
        assert_eq!(state.current_over.len(), 6);
        assert!(state.is_over_complete());

        state.continue_innings().unwrap();
        assert!(state.current_over.is_empty());
        assert_eq!(state.ball_log.len(), 6);
        assert!(state.accepts_delivery());
    }

    #[test]
    fn test_odd_run_on_last_ball_swaps_twice() {
        let mut state = batting("A", "B");
        for _ in 0..5 {
            normal(&mut state, 0);
        }
        assert_eq!(normal(&mut state, 1), DeliveryOutcome::OverComplete);

        // Odd-run swap then end-of-over swap: A keeps strike.
        assert_eq!(state.striker().name, "A");
        assert_eq!(state.striker().runs, 1);
    }

    #[test]
    fn test_over_gate_blocks_scoring() {
        let mut state = batting("A", "B");
        for _ in 0..6 {
            normal(&mut state, 0);
        }
        let before = state.clone();
        assert_eq!(
            state.record_delivery(1, DeliveryKind::Normal, 0),
            Err(ScoringError::OverDecisionPending)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_wide_and_no_ball_are_extras() {
        let mut state = batting("A", "B");
        state.record_delivery(1, DeliveryKind::Wide, 1).unwrap();
        state.record_delivery(2, DeliveryKind::NoBall, 1).unwrap();

        assert_eq!(state.score.runs, 5);
        assert_eq!(state.score.balls, 0);
        assert_eq!(state.striker().name, "A");
        assert_eq!(state.striker().runs, 0);
        assert_eq!(state.striker().balls, 0);

        // Neither consumed a legal ball, so both carry ball number 0.
        assert_eq!(state.ball_log[0].ball_number, 0);
        assert_eq!(state.ball_log[1].ball_number, 0);
        assert_eq!(state.ball_log[1].over_number, 1);
        assert_eq!(state.current_over.len(), 2);
    }

    #[test]
    fn test_wicket_waits_for_replacement() {
        let mut state = batting("A", "B");
        normal(&mut state, 2);

        assert_eq!(
            state.record_delivery(0, DeliveryKind::Wicket, 0).unwrap(),
            DeliveryOutcome::AwaitingReplacement
        );
        assert_eq!(state.score.wickets, 0);
        assert_eq!(state.score.balls, 1);
        assert_eq!(state.ball_log.len(), 1);
        assert_eq!(state.phase.pending_ball().map(|b| b.ball_number), Some(2));

        assert_eq!(
            state.record_delivery(0, DeliveryKind::Wicket, 0),
            Err(ScoringError::ReplacementPending)
        );
        assert_eq!(
            state.confirm_replacement(" "),
            Err(ScoringError::BlankName { role: "incoming batsman" })
        );

        assert_eq!(state.confirm_replacement("C").unwrap(), DeliveryOutcome::Applied);
        assert_eq!(state.score.wickets, 1);
        assert_eq!(state.score.balls, 2);
        assert_eq!(state.striker(), &Batsman::new("C"));
        assert_eq!(state.non_striker().name, "B");

        let out = &state.dismissed[0];
        assert_eq!(out.name, "A");
        assert_eq!(out.runs, 2);
        assert!(out.is_out);
        assert_eq!(out.how_out.as_deref(), Some("out"));

        let logged = state.ball_log.last().unwrap();
        assert_eq!(logged.kind, DeliveryKind::Wicket);
        assert_eq!(logged.batsman, "A");
        assert_eq!(logged.new_batsman.as_deref(), Some("C"));
    }

    #[test]
    fn test_run_out_runs_go_to_team_only() {
        let mut state = batting("A", "B");
        state.record_delivery(1, DeliveryKind::RunOut, 0).unwrap();
        state.confirm_replacement("C").unwrap();

        assert_eq!(state.score.runs, 1);
        assert_eq!(state.score.wickets, 1);
        assert_eq!(state.dismissed[0].runs, 0);
        assert_eq!(state.dismissed[0].balls, 0);
        assert_eq!(state.dismissed[0].how_out.as_deref(), Some("run out"));
        assert_eq!(state.striker().runs, 0);
    }

    #[test]
    fn test_huge_runs_saturate_totals() {
        let mut state = batting("A", "B");
        state.record_delivery(u32::MAX, DeliveryKind::Wide, 1).unwrap();
        assert_eq!(state.score.runs, u32::MAX);

        state.record_delivery(u32::MAX, DeliveryKind::RunOut, 0).unwrap();
        state.confirm_replacement("C").unwrap();
        assert_eq!(state.score.runs, u32::MAX);
        assert_eq!(state.score.wickets, 1);
        assert_eq!(state.score.balls, 1);
    }

    #[test]
    fn test_confirm_without_pending_wicket() {
        let mut state = batting("A", "B");
        assert_eq!(state.confirm_replacement("C"), Err(ScoringError::NoPendingWicket));
    }

    #[test]
    fn test_wicket_on_sixth_ball_completes_over() {
        let mut state = batting("A", "B");
        for _ in 0..5 {
            normal(&mut state, 0);
        }
        state.record_delivery(0, DeliveryKind::Wicket, 0).unwrap();
        assert_eq!(state.confirm_replacement("C").unwrap(), DeliveryOutcome::OverComplete);

        assert_eq!(state.score.overs, 1);
        assert_eq!(state.score.balls, 0);
        // Incoming batsman takes strike, then the over-end swap moves them off it.
        assert_eq!(state.striker().name, "B");
        assert_eq!(state.non_striker().name, "C");
    }

    #[test]
    fn test_end_innings_freezes_scoring() {
        let mut state = batting("A", "B");
        assert_eq!(state.end_innings(), Err(ScoringError::NoOverBoundary));

        for _ in 0..6 {
            normal(&mut state, 1);
        }
        state.end_innings().unwrap();
        assert_eq!(state.match_status, MatchStatus::Completed);
        assert!(state.current_over.is_empty());
        assert!(matches!(
            state.record_delivery(1, DeliveryKind::Normal, 0),
            Err(ScoringError::NotBatting { .. })
        ));
    }

    #[test]
    fn test_reset() {
        let mut state = batting("A", "B");
        normal(&mut state, 4);
        state.reset();
        assert_eq!(state, MatchState::new());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: even runs never change the striker inside an over
            #[test]
            fn prop_even_runs_keep_strike(runs in prop::collection::vec(prop::sample::select(vec![0u32, 2, 4, 6]), 1..6)) {
                let mut state = batting("A", "B");
                for r in runs {
                    state.record_delivery(r, DeliveryKind::Normal, 0).unwrap();
                    prop_assert_eq!(state.striker().name.as_str(), "A");
                }
            }

            /// Property: six counted deliveries always roll exactly one over
            #[test]
            fn prop_six_counted_balls_make_an_over(
                kinds in prop::collection::vec(0u8..3, 6),
                runs in prop::collection::vec(prop::sample::select(vec![0u32, 1, 2, 3, 4, 6]), 6),
            ) {
                let mut state = batting("A", "B");
                let mut incoming = 0;
                for (k, r) in kinds.iter().zip(runs) {
                    prop_assert_eq!(state.score.overs, 0);
                    match *k {
                        0 => { state.record_delivery(r, DeliveryKind::Normal, 0).unwrap(); }
                        1 => {
                            state.record_delivery(0, DeliveryKind::Wicket, 0).unwrap();
                            incoming += 1;
                            state.confirm_replacement(&format!("N{incoming}")).unwrap();
                        }
                        _ => {
                            state.record_delivery(r, DeliveryKind::RunOut, 0).unwrap();
                            incoming += 1;
                            state.confirm_replacement(&format!("N{incoming}")).unwrap();
                        }
                    }
                }
                prop_assert_eq!(state.score.overs, 1);
                prop_assert_eq!(state.score.balls, 0);
                prop_assert!(state.is_over_complete());
                prop_assert!(state.ball_log.len() >= state.current_over.len());
            }
        }
    }
}
