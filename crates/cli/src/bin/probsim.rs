//! Probsim - coin toss and dice roll Monte Carlo simulation.

use anyhow::Result;
use clap::Parser;
use stafflab_cli::logging::init_logging;
use stafflab_cli::{probsim, ProbsimCli};

fn main() -> Result<()> {
    let cli = ProbsimCli::parse();
    init_logging(cli.log_level)?;

    let mut stdout = std::io::stdout().lock();
    probsim::run(&cli, &mut stdout)
}
