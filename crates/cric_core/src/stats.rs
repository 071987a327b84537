//! Derived, side-effect-free statistics.

use crate::models::{Batsman, Score};
use crate::BALLS_PER_OVER;

/// Round half away from zero; `{:.N}` alone would print `6.25` as `6.2`.
fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Runs per 100 balls faced, `0.0` before the first ball.
pub fn strike_rate_value(batsman: &Batsman) -> f64 {
    if batsman.balls == 0 {
        return 0.0;
    }
    (batsman.runs as f64 / batsman.balls as f64) * 100.0
}

/// Strike rate formatted to one decimal place, e.g. `125.0`.
pub fn strike_rate(batsman: &Batsman) -> String {
    format!("{:.1}", round_half_up(strike_rate_value(batsman), 1))
}

/// Team runs per six legal balls, `0.0` before the first legal ball.
pub fn current_run_rate_value(score: &Score) -> f64 {
    let total_balls = score.total_balls();
    if total_balls == 0 {
        return 0.0;
    }
    (score.runs as f64 / total_balls as f64) * BALLS_PER_OVER as f64
}

/// Current run rate formatted to two decimal places, e.g. `6.92`.
pub fn current_run_rate(score: &Score) -> String {
    format!("{:.2}", round_half_up(current_run_rate_value(score), 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batsman(runs: u32, balls: u32) -> Batsman {
        Batsman { runs, balls, ..Batsman::new("A") }
    }

    #[test]
    fn test_strike_rate() {
        assert_eq!(strike_rate(&batsman(0, 0)), "0.0");
        assert_eq!(strike_rate(&batsman(7, 0)), "0.0");
        assert_eq!(strike_rate(&batsman(50, 40)), "125.0");
        assert_eq!(strike_rate(&batsman(1, 3)), "33.3");
        assert_eq!(strike_rate(&batsman(0, 5)), "0.0");
    }

    #[test]
    fn test_current_run_rate() {
        assert_eq!(current_run_rate(&Score::default()), "0.00");

        let score = Score { runs: 30, wickets: 0, overs: 4, balls: 2 };
        assert_eq!(current_run_rate(&score), "6.92");

        let score = Score { runs: 12, wickets: 1, overs: 2, balls: 0 };
        assert_eq!(current_run_rate(&score), "6.00");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(strike_rate(&batsman(1, 16)), "6.3");
        assert_eq!(strike_rate(&batsman(3, 16)), "18.8");

        let score = Score { runs: 1, wickets: 0, overs: 8, balls: 0 };
        assert_eq!(current_run_rate(&score), "0.13");
        let score = Score { runs: 5, wickets: 0, overs: 8, balls: 0 };
        assert_eq!(current_run_rate(&score), "0.63");
    }

    #[test]
    fn test_extras_before_first_legal_ball() {
        // Wides add runs without a legal ball; the rate stays undefined.
        let score = Score { runs: 2, ..Default::default() };
        assert_eq!(current_run_rate(&score), "0.00");
    }
}
