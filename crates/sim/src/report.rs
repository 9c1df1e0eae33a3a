//! Simulation results and their text rendering.

use serde::Serialize;
use std::fmt;

const RULE_WIDTH: usize = 50;

/// Outcome of a coin-toss run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinTossReport {
    pub trials: u64,
    pub heads: u64,
    pub tails: u64,
    pub probability_heads: f64,
    pub probability_tails: f64,
}

impl CoinTossReport {
    /// `heads` must not exceed `trials`, and `trials` must be positive
    pub(crate) fn from_counts(trials: u64, heads: u64) -> Self {
        let tails = trials - heads;
        Self {
            trials,
            heads,
            tails,
            probability_heads: heads as f64 / trials as f64,
            probability_tails: tails as f64 / trials as f64,
        }
    }
}

impl fmt::Display for CoinTossReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Coin Toss Simulation ({} trials)",
            group_thousands(self.trials)
        )?;
        writeln!(
            f,
            "Heads: {}, Probability: {:.4}",
            self.heads, self.probability_heads
        )?;
        writeln!(
            f,
            "Tails: {}, Probability: {:.4}",
            self.tails, self.probability_tails
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}

/// Outcome of a two-dice run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiceRollReport {
    pub trials: u64,
    pub sum_seven: u64,
    pub probability_sum_seven: f64,
}

impl DiceRollReport {
    pub(crate) fn from_counts(trials: u64, sum_seven: u64) -> Self {
        Self {
            trials,
            sum_seven,
            probability_sum_seven: sum_seven as f64 / trials as f64,
        }
    }
}

impl fmt::Display for DiceRollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Dice Roll Simulation ({} trials)",
            group_thousands(self.trials)
        )?;
        writeln!(f, "Sum = 7 occurred: {} times", self.sum_seven)?;
        writeln!(
            f,
            "Experimental Probability of Sum = 7: {:.4}",
            self.probability_sum_seven
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}

/// `10000` -> `10,000`
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
