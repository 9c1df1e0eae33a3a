//! # Stafflab Sim
//!
//! Monte Carlo estimates of two textbook probabilities:
//! - a fair coin landing heads
//! - two fair dice summing to seven
//!
//! ```rust,ignore
//! use stafflab_sim::{Simulator, DEFAULT_TRIALS};
//!
//! let mut sim = Simulator::seeded(42);
//! let coin = sim.simulate_coin(DEFAULT_TRIALS)?;
//! let dice = sim.simulate_dice(DEFAULT_TRIALS)?;
//! print!("{coin}{dice}");
//! ```

pub mod error;
pub mod report;
pub mod simulator;

pub use error::{SimError, SimResult};
pub use report::{CoinTossReport, DiceRollReport};
pub use simulator::{Simulator, DEFAULT_TRIALS};
