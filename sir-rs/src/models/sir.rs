use super::{CompartmentModel, ModelKind, Rates};
use crate::{
    error::Result,
    params::{Params, INITIAL_INFECTED},
    prelude::{Real, Time},
};
use std::fmt::{self, Display};

/// Basic SIR model.
///
/// dS/dt = -alpha * I * S
/// dR/dt = beta * I
/// dI/dt = -dS/dt - dR/dt
///
/// The infected rate is derived from the other two so the rates always sum to
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicSIR {
    susceptible: Real,
    infected: Real,
    recovered: Real,
    time: Time,
    params: Params,
}

impl BasicSIR {
    /// Create model at t = 0 with 10 infected individuals. Params are not
    /// validated, see try_new().
    pub fn new(params: Params) -> Self {
        BasicSIR {
            susceptible: params.total() - INITIAL_INFECTED,
            infected: INITIAL_INFECTED,
            recovered: 0.0,
            time: 0.0,
            params,
        }
    }

    /// Create model after validating params.
    pub fn try_new(params: Params) -> Result<Self> {
        params.validate(ModelKind::Basic)?;
        Ok(Self::new(params))
    }

    /// Change of the susceptible population in the next step.
    pub fn rate_susceptible(&self) -> Real {
        -self.params.alpha() * self.infected * self.susceptible * self.params.time_step()
    }

    /// Change of the infected population in the next step.
    pub fn rate_infected(&self) -> Real {
        -self.rate_susceptible() - self.rate_recovered()
    }

    /// Change of the recovered population in the next step.
    pub fn rate_recovered(&self) -> Real {
        self.params.beta() * self.infected * self.params.time_step()
    }
}

impl CompartmentModel for BasicSIR {
    fn kind(&self) -> ModelKind {
        ModelKind::Basic
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn time(&self) -> Time {
        self.time
    }

    fn susceptible(&self) -> Real {
        self.susceptible
    }

    fn infected(&self) -> Real {
        self.infected
    }

    fn recovered(&self) -> Real {
        self.recovered
    }

    fn rates(&self) -> Rates {
        Rates {
            susceptible: self.rate_susceptible(),
            infected: self.rate_infected(),
            recovered: self.rate_recovered(),
            dead: 0.0,
        }
    }

    fn advance(&mut self) {
        let rates = self.rates();
        self.susceptible += rates.susceptible;
        self.infected += rates.infected;
        self.recovered += rates.recovered;
        self.time += self.params.time_step();
    }
}

impl Display for BasicSIR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
