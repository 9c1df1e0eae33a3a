//! Simulation errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("Number of trials must be positive")]
    ZeroTrials,
}

pub type SimResult<T> = Result<T, SimError>;
