//! Random trial loops.

use crate::error::{SimError, SimResult};
use crate::report::{CoinTossReport, DiceRollReport};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Trials per simulation when the caller does not choose
pub const DEFAULT_TRIALS: u64 = 10_000;

/// Runs Monte Carlo trials against an owned randomness source
pub struct Simulator<R: Rng> {
    rng: R,
}

impl Simulator<StdRng> {
    /// Reproducible simulator: the same seed yields the same reports
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Simulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Toss a fair coin `trials` times
    pub fn simulate_coin(&mut self, trials: u64) -> SimResult<CoinTossReport> {
        if trials == 0 {
            return Err(SimError::ZeroTrials);
        }

        let mut heads = 0u64;
        for _ in 0..trials {
            if self.rng.gen::<bool>() {
                heads += 1;
            }
        }

        let report = CoinTossReport::from_counts(trials, heads);
        debug!(trials, heads, tails = report.tails, "coin toss simulation finished");
        Ok(report)
    }

    /// Roll two fair dice `trials` times, counting sums of seven
    pub fn simulate_dice(&mut self, trials: u64) -> SimResult<DiceRollReport> {
        if trials == 0 {
            return Err(SimError::ZeroTrials);
        }

        let mut sum_seven = 0u64;
        for _ in 0..trials {
            let die1: u8 = self.rng.gen_range(1..=6);
            let die2: u8 = self.rng.gen_range(1..=6);
            if die1 + die2 == 7 {
                sum_seven += 1;
            }
        }

        debug!(trials, sum_seven, "dice roll simulation finished");
        Ok(DiceRollReport::from_counts(trials, sum_seven))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_counts_add_up() {
        let mut sim = Simulator::seeded(7);
        let report = sim.simulate_coin(DEFAULT_TRIALS).unwrap();

        assert_eq!(report.heads + report.tails, 10_000);
        assert!((0.0..=1.0).contains(&report.probability_heads));
        assert!((0.0..=1.0).contains(&report.probability_tails));
        assert!((report.probability_heads + report.probability_tails - 1.0).abs() < 1e-12);
        // Fair coin, 10k trials: 0.05 is ten standard deviations
        assert!((report.probability_heads - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_dice_count_in_range() {
        let mut sim = Simulator::seeded(7);
        let report = sim.simulate_dice(DEFAULT_TRIALS).unwrap();

        assert!(report.sum_seven <= 10_000);
        assert!((0.0..=1.0).contains(&report.probability_sum_seven));
    }

    #[test]
    fn test_dice_probability_near_one_sixth() {
        let runs = 20;
        let mut total = 0.0;
        for seed in 0..runs {
            let report = Simulator::seeded(seed).simulate_dice(DEFAULT_TRIALS).unwrap();
            assert!((report.probability_sum_seven - 1.0 / 6.0).abs() < 0.025);
            total += report.probability_sum_seven;
        }
        let mean = total / runs as f64;
        assert!((mean - 1.0 / 6.0).abs() < 0.01, "mean {mean}");
    }

    #[test]
    fn test_same_seed_same_reports() {
        let mut a = Simulator::seeded(2024);
        let mut b = Simulator::seeded(2024);

        assert_eq!(a.simulate_coin(500).unwrap(), b.simulate_coin(500).unwrap());
        assert_eq!(a.simulate_dice(500).unwrap(), b.simulate_dice(500).unwrap());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let mut sim = Simulator::seeded(1);
        assert_eq!(sim.simulate_coin(0), Err(SimError::ZeroTrials));
        assert_eq!(sim.simulate_dice(0), Err(SimError::ZeroTrials));
    }

    #[test]
    fn test_single_trial() {
        let mut sim = Simulator::from_entropy();
        let coin = sim.simulate_coin(1).unwrap();
        assert_eq!(coin.heads + coin.tails, 1);
        assert!(coin.probability_heads == 0.0 || coin.probability_heads == 1.0);
    }
}
