//! Analysis of simulated trajectories.
//!
//! The free functions work on plain columns of an epicurve. [`SirAnalytic`]
//! holds the closed-form phase relation of the basic SIR model, which is only
//! meaningful for [`ModelKind::Basic`](crate::models::ModelKind) runs.
mod report;
pub use report::*;

use crate::{
    error::{Result, SirError},
    params::{Params, INITIAL_INFECTED},
    prelude::{Real, Time, INF},
};
use getset::CopyGetters;

fn check_columns(times: &[Time], values: &[Real], min_len: usize) -> Result<()> {
    if times.len() != values.len() {
        return Err(SirError::LengthMismatch {
            times: times.len(),
            values: values.len(),
        });
    }
    if values.len() < min_len {
        return Err(SirError::TrajectoryTooShort { len: values.len() });
    }
    Ok(())
}

/// Time and size of the largest single-step drop of the susceptible curve.
///
/// Ties resolve to the earliest step.
pub fn fastest_spread(times: &[Time], susceptible: &[Real]) -> Result<(Time, Real)> {
    check_columns(times, susceptible, 2)?;
    let mut best = (times[0], -INF);
    for (i, w) in susceptible.windows(2).enumerate() {
        let spread = w[0] - w[1];
        if spread > best.1 {
            best = (times[i], spread);
        }
    }
    Ok(best)
}

/// Time when the disease was spreading the fastest.
pub fn fastest_spread_time(times: &[Time], susceptible: &[Real]) -> Result<Time> {
    fastest_spread(times, susceptible).map(|(t, _)| t)
}

/// Time and value of the maximum of a curve. Ties resolve to the earliest
/// sample.
pub fn peak(times: &[Time], values: &[Real]) -> Result<(Time, Real)> {
    check_columns(times, values, 1)?;
    let mut best = (times[0], values[0]);
    for (&t, &x) in times.iter().zip(values) {
        if x > best.1 {
            best = (t, x);
        }
    }
    Ok(best)
}

/// Closed-form relation between infected and susceptible of the basic SIR
/// model.
///
/// Integrating dI/dS = -1 + beta / (alpha * S) from the initial state gives
///
/// I(S) = beta / alpha * ln(S / S0) - S + N
///
/// with S0 = N - 10.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SirAnalytic {
    alpha: Real,
    beta: Real,
    population: Real,
    initial_susceptible: Real,
}

impl SirAnalytic {
    pub fn new(population: usize, alpha: Real, beta: Real) -> Self {
        let population = population as Real;
        SirAnalytic {
            alpha,
            beta,
            population,
            initial_susceptible: population - INITIAL_INFECTED,
        }
    }

    pub fn from_params(params: &Params) -> Self {
        Self::new(params.population(), params.alpha(), params.beta())
    }

    /// Infected population on the trajectory when the susceptible population
    /// equals s. Defined for 0 < s <= N.
    pub fn infected_from_susceptible(&self, s: Real) -> Result<Real> {
        if !(s > 0.0 && s <= self.population) {
            return Err(SirError::OutOfDomain {
                s,
                n: self.population,
            });
        }
        let ratio = self.beta / self.alpha;
        Ok(ratio * (s / self.initial_susceptible).ln() - s + self.population)
    }

    /// Susceptible population at the infection peak, where dI/dt = 0.
    pub fn peak_susceptible(&self) -> Real {
        self.beta / self.alpha
    }

    /// Theoretical maximum of infected individuals at a single time.
    ///
    /// Fails when beta / alpha > N, in which case the epidemic never grows.
    pub fn max_infected(&self) -> Result<Real> {
        self.infected_from_susceptible(self.peak_susceptible())
    }

    /// Largest integer S for which I(S) rounds to zero, scanning down from
    /// N. This approximates the susceptible count left once the epidemic is
    /// over. Returns 0 if no such S exists.
    pub fn susceptible_floor_for_zero_infection(&self) -> usize {
        let n = self.population as usize;
        for s in (1..=n).rev() {
            if let Ok(i) = self.infected_from_susceptible(s as Real) {
                if i.round() == 0.0 {
                    return s;
                }
            }
        }
        return 0;
    }
}
