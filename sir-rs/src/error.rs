use crate::prelude::{Real, Time};
use thiserror::Error;

/// Errors raised while configuring, running or analysing a simulation.
///
/// Rate computations themselves never fail. Everything here is either a bad
/// parameter caught at construction, an analytic relation evaluated outside
/// its domain or a failure in the surrounding I/O.
#[derive(Error, Debug)]
pub enum SirError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParam {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
    #[error("susceptible count {s} outside the analytic domain (0, {n}]")]
    OutOfDomain { s: Real, n: Real },
    #[error("trajectory has {len} samples, at least 2 are required")]
    TrajectoryTooShort { len: usize },
    #[error("column length mismatch: {times} times and {values} values")]
    LengthMismatch { times: usize, values: usize },
    #[error("infection still active after {steps} steps (t = {time})")]
    NoTermination { steps: usize, time: Time },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type Result<T, E = SirError> = std::result::Result<T, E>;
