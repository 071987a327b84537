//! Operator input parsing
//!
//! Translates console lines into scorer calls. Runs typed for extras and
//! run-outs are coerced leniently by default: anything that does not start
//! with a non-negative integer counts as 0. Strict mode rejects the same
//! input instead.

use crate::error::InputError;
use crate::models::DeliveryKind;

/// Runs the operator may score off the bat with a single key.
pub const BAT_RUNS: [u32; 6] = [0, 1, 2, 3, 4, 6];

/// Largest run count accepted for an extra or run-out entry.
pub const MAX_ENTERED_RUNS: u32 = 99;

/// Extras charged for a wide or no-ball on top of any runs taken.
pub const PENALTY_EXTRAS: u32 = 1;

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorCommand {
    Start { striker: String, non_striker: String },
    Delivery { runs: u32, kind: DeliveryKind, extras: u32 },
    NewBatsman(String),
    Continue,
    End,
    Summary,
    Status,
    Reset,
    Help,
    Quit,
}

/// Lenient run parsing: leading digits are honored ("3x" is 3), while
/// blank, non-numeric, negative and out-of-range entries become 0.
pub fn coerce_runs(raw: &str) -> u32 {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits: &str = {
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    if negative || digits.is_empty() {
        return 0;
    }
    match digits.parse::<u32>() {
        Ok(runs) if runs <= MAX_ENTERED_RUNS => runs,
        _ => 0,
    }
}

fn strict_runs(raw: &str) -> Result<u32, InputError> {
    let raw = raw.trim();
    let runs = raw.parse::<u32>().map_err(|_| InputError::InvalidRuns(raw.to_string()))?;
    if runs > MAX_ENTERED_RUNS {
        return Err(InputError::RunsOutOfRange { runs, max: MAX_ENTERED_RUNS });
    }
    Ok(runs)
}

impl OperatorCommand {
    /// Parse one console line.
    pub fn parse(line: &str, strict_runs_input: bool) -> Result<Self, InputError> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        if head.is_empty() {
            return Err(InputError::Empty);
        }

        let runs_arg = |command: &'static str| -> Result<u32, InputError> {
            if strict_runs_input {
                if rest.is_empty() {
                    return Err(InputError::MissingArgument(command));
                }
                strict_runs(rest)
            } else {
                Ok(coerce_runs(rest))
            }
        };

        if head.chars().all(|c| c.is_ascii_digit()) {
            let runs: u32 = head.parse().map_err(|_| InputError::InvalidRuns(head.to_string()))?;
            if !BAT_RUNS.contains(&runs) {
                return Err(InputError::UnsupportedRuns(runs));
            }
            return Ok(OperatorCommand::Delivery { runs, kind: DeliveryKind::Normal, extras: 0 });
        }

        let command = match head.to_ascii_lowercase().as_str() {
            "wd" | "wide" => OperatorCommand::Delivery {
                runs: runs_arg("wd")?,
                kind: DeliveryKind::Wide,
                extras: PENALTY_EXTRAS,
            },
            "nb" | "noball" => OperatorCommand::Delivery {
                runs: runs_arg("nb")?,
                kind: DeliveryKind::NoBall,
                extras: PENALTY_EXTRAS,
            },
            "ro" | "runout" => OperatorCommand::Delivery {
                runs: runs_arg("ro")?,
                kind: DeliveryKind::RunOut,
                extras: 0,
            },
            "w" | "wicket" => {
                OperatorCommand::Delivery { runs: 0, kind: DeliveryKind::Wicket, extras: 0 }
            }
            "new" => {
                if rest.is_empty() {
                    return Err(InputError::MissingArgument("new"));
                }
                OperatorCommand::NewBatsman(rest.to_string())
            }
            "start" => {
                let Some((striker, non_striker)) = rest.split_once(',') else {
                    return Err(InputError::MissingArgument("start"));
                };
                OperatorCommand::Start {
                    striker: striker.trim().to_string(),
                    non_striker: non_striker.trim().to_string(),
                }
            }
            "continue" | "c" => OperatorCommand::Continue,
            "end" => OperatorCommand::End,
            "summary" | "s" => OperatorCommand::Summary,
            "status" => OperatorCommand::Status,
            "reset" => OperatorCommand::Reset,
            "help" | "?" => OperatorCommand::Help,
            "quit" | "q" | "exit" => OperatorCommand::Quit,
            other => return Err(InputError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}
