//! Employees - in-memory employee record manager.

use anyhow::{Context, Result};
use clap::Parser;
use stafflab_business::EmployeeStore;
use stafflab_cli::logging::init_logging;
use stafflab_cli::{EmployeesCli, Menu};
use std::io;

fn main() -> Result<()> {
    let cli = EmployeesCli::parse();
    init_logging(cli.log_level)?;

    let store = if cli.no_seed {
        EmployeeStore::new()
    } else {
        EmployeeStore::seeded().context("Failed to load seed roster")?
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(store, stdin.lock(), io::stdout());
    menu.run()
}
