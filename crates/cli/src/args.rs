//! Command-line arguments for both binaries.

use clap::{Parser, ValueEnum};
use stafflab_sim::DEFAULT_TRIALS;

/// Employees - in-memory employee record manager
#[derive(Parser, Debug)]
#[command(name = "employees")]
#[command(author, version, about, long_about = None)]
pub struct EmployeesCli {
    /// Start with an empty roster instead of the seed records
    #[arg(long)]
    pub no_seed: bool,

    /// Log level (logs go to stderr)
    #[arg(long, short = 'l', default_value = "warn")]
    pub log_level: LogLevel,
}

/// Probsim - coin toss and dice roll Monte Carlo simulation
#[derive(Parser, Debug)]
#[command(name = "probsim")]
#[command(author, version, about, long_about = None)]
pub struct ProbsimCli {
    /// Trials per simulation
    #[arg(long, short = 'n', default_value_t = DEFAULT_TRIALS)]
    pub trials: u64,

    /// Seed for a reproducible run
    #[arg(long, short)]
    pub seed: Option<u64>,

    /// Emit JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Log level (logs go to stderr)
    #[arg(long, short = 'l', default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employees_defaults() {
        let cli = EmployeesCli::parse_from(["employees"]);
        assert!(!cli.no_seed);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_employees_flags() {
        let cli = EmployeesCli::parse_from(["employees", "--no-seed", "-l", "info"]);
        assert!(cli.no_seed);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_probsim_defaults() {
        let cli = ProbsimCli::parse_from(["probsim"]);
        assert_eq!(cli.trials, 10_000);
        assert_eq!(cli.seed, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_probsim_short_flags() {
        let cli = ProbsimCli::parse_from(["probsim", "-n", "500", "-s", "42", "-l", "debug", "--json"]);
        assert_eq!(cli.trials, 500);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_level.to_tracing_level(), tracing::Level::DEBUG);
        assert!(cli.json);
    }

    #[test]
    fn test_unknown_arguments_rejected() {
        assert!(EmployeesCli::try_parse_from(["employees", "report"]).is_err());
        assert!(ProbsimCli::try_parse_from(["probsim", "--log-level", "loud"]).is_err());
    }
}
