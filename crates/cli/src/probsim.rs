//! Runs both simulations and writes the reports.

use crate::args::ProbsimCli;
use anyhow::{Context, Result};
use stafflab_sim::Simulator;
use std::io::Write;
use tracing::info;

pub fn run(cli: &ProbsimCli, out: &mut impl Write) -> Result<()> {
    let mut simulator = match cli.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            Simulator::seeded(seed)
        }
        None => Simulator::from_entropy(),
    };

    let coin = simulator
        .simulate_coin(cli.trials)
        .context("Coin toss simulation failed")?;
    let dice = simulator
        .simulate_dice(cli.trials)
        .context("Dice roll simulation failed")?;

    if cli.json {
        let value = serde_json::json!({ "coin": coin, "dice": dice });
        let text = serde_json::to_string_pretty(&value).context("Failed to encode reports")?;
        writeln!(out, "{text}")?;
    } else {
        write!(out, "{coin}{dice}")?;
    }
    Ok(())
}
