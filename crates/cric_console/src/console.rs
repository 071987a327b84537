//! Operator input loop.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use cric_core::{MatchSession, MatchStatus, OperatorCommand, SessionError, SnapshotStore};

use crate::render;

enum Reply {
    Scorecard,
    Summary,
    Help,
    Quit,
}

fn execute<S: SnapshotStore>(
    session: &mut MatchSession<S>,
    command: OperatorCommand,
) -> Result<Reply, SessionError> {
    debug!(?command, "Operator command");
    let reply = match command {
        OperatorCommand::Start { striker, non_striker } => {
            session.start_match(&striker, &non_striker)?;
            Reply::Scorecard
        }
        OperatorCommand::Delivery { runs, kind, extras } => {
            session.record_delivery(runs, kind, extras)?;
            Reply::Scorecard
        }
        OperatorCommand::NewBatsman(name) => {
            session.confirm_replacement(&name)?;
            Reply::Scorecard
        }
        OperatorCommand::Continue => {
            session.continue_innings()?;
            Reply::Scorecard
        }
        OperatorCommand::End => {
            session.end_innings()?;
            Reply::Summary
        }
        OperatorCommand::Reset => {
            session.reset()?;
            Reply::Scorecard
        }
        OperatorCommand::Summary => Reply::Summary,
        OperatorCommand::Status => Reply::Scorecard,
        OperatorCommand::Help => Reply::Help,
        OperatorCommand::Quit => Reply::Quit,
    };
    Ok(reply)
}

/// Drive `session` from `input` until end of input or `quit`.
pub fn run<S, R, W>(mut session: MatchSession<S>, input: R, mut out: W) -> Result<()>
where
    S: SnapshotStore,
    R: BufRead,
    W: Write,
{
    render::write_banner(&mut out)?;
    if session.state().match_status != MatchStatus::Setup {
        render::write_scorecard(&mut out, &session)?;
    }
    render::write_prompt(&mut out, &session)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match session.parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "! {e}")?;
                continue;
            }
        };

        match execute(&mut session, command) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Help) => writeln!(out, "{}", render::HELP)?,
            Ok(Reply::Summary) => write!(out, "{}", session.summary())?,
            Ok(Reply::Scorecard) => {
                if session.state().match_status != MatchStatus::Setup {
                    render::write_scorecard(&mut out, &session)?;
                }
            }
            Err(SessionError::Save(e)) if !e.is_recoverable() => return Err(e.into()),
            Err(e) => writeln!(out, "! {e}")?,
        }
        render::write_prompt(&mut out, &session)?;
    }

    out.flush()?;
    Ok(())
}
