//! Stafflab CLI
//!
//! Shared pieces behind the two binaries:
//!
//! ```bash
//! employees                      # interactive menu, seeded roster
//! employees --no-seed            # interactive menu, empty roster
//! probsim                        # coin + dice, 10,000 trials each
//! probsim --trials 500 --seed 42 --json
//! ```

pub mod args;
pub mod logging;
pub mod menu;
pub mod probsim;
pub mod prompt;

pub use args::{EmployeesCli, LogLevel, ProbsimCli};
pub use menu::Menu;
pub use prompt::Prompter;
