//! Plain-text views of the match.

use std::io::{self, Write};

use cric_core::{InningsPhase, MatchSession, MatchStatus, SnapshotStore};

pub const HELP: &str = "\
Commands:
  start STRIKER, NON_STRIKER   open the innings
  0 1 2 3 4 6                  runs off the bat
  wd N | nb N                  wide / no-ball (+1 extra) with N runs
  w                            wicket
  ro N                         run-out with N runs completed
  new NAME                     incoming batsman after a wicket
  continue | end               decision at the end of an over
  summary                      match summary
  reset                        discard the match
  quit";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "CricScore - ball-by-ball scoring (type 'help' for commands)")
}

pub fn write_scorecard<W: Write, S: SnapshotStore>(
    out: &mut W,
    session: &MatchSession<S>,
) -> io::Result<()> {
    let state = session.state();
    let score = &state.score;

    writeln!(
        out,
        "Innings {} | Over {} | RR: {}",
        state.innings,
        score.overs_display(),
        session.current_run_rate()
    )?;
    writeln!(out, "{} ({} overs)", score.score_line(), score.overs_display())?;

    let striker = state.striker();
    let non_striker = state.non_striker();
    writeln!(
        out,
        "* {} {} ({}) SR: {}  4s: {} | 6s: {}",
        striker.name,
        striker.runs,
        striker.balls,
        session.striker_strike_rate(),
        striker.fours,
        striker.sixes
    )?;
    writeln!(
        out,
        "  {} {} ({}) SR: {}  4s: {} | 6s: {}",
        non_striker.name,
        non_striker.runs,
        non_striker.balls,
        session.non_striker_strike_rate(),
        non_striker.fours,
        non_striker.sixes
    )?;

    if state.current_over.is_empty() {
        writeln!(out, "This over: no balls bowled")?;
    } else {
        let chips: Vec<String> = state.current_over.iter().map(|b| b.over_chip()).collect();
        writeln!(out, "This over: {}", chips.join(" "))?;
    }
    Ok(())
}

/// What the operator is expected to type next.
pub fn write_prompt<W: Write, S: SnapshotStore>(
    out: &mut W,
    session: &MatchSession<S>,
) -> io::Result<()> {
    let state = session.state();
    match (state.match_status, &state.phase) {
        (MatchStatus::Setup, _) => writeln!(out, "Opening batsmen? start STRIKER, NON_STRIKER"),
        (MatchStatus::Batting, InningsPhase::AwaitingReplacement(_)) => {
            writeln!(out, "A wicket has fallen. Enter the new batsman: new NAME")
        }
        (MatchStatus::Batting, InningsPhase::OverComplete) => writeln!(
            out,
            "Over {} is complete. continue or end?",
            state.score.overs
        ),
        (MatchStatus::Batting, InningsPhase::Idle) => writeln!(out, "Next ball?"),
        (MatchStatus::Completed, _) | (MatchStatus::InningsBreak, _) => {
            writeln!(out, "Innings over. summary, reset or quit?")
        }
    }
}
