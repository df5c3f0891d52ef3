use super::{quarantine_contacts, CompartmentModel, ModelKind, Rates};
use crate::{
    error::Result,
    params::{Params, INITIAL_INFECTED},
    prelude::{Real, Time},
};
use std::fmt::{self, Display};

/// SIR model with mortality and a quarantining fraction of the population.
///
/// A fraction q of the population quarantines and only meets `attendants`
/// others per infected individual. The remaining 1 - q mix freely. Resolved
/// cases split between recovered (1 - d) and dead (d).
#[derive(Debug, Clone, PartialEq)]
pub struct QuarantineSIR {
    susceptible: Real,
    infected: Real,
    recovered: Real,
    dead: Real,
    time: Time,
    params: Params,
}

impl QuarantineSIR {
    /// Create model at t = 0 with 10 infected individuals. Params are not
    /// validated, see try_new().
    pub fn new(params: Params) -> Self {
        QuarantineSIR {
            susceptible: params.total() - INITIAL_INFECTED,
            infected: INITIAL_INFECTED,
            recovered: 0.0,
            dead: 0.0,
            time: 0.0,
            params,
        }
    }

    /// Create model after validating params.
    pub fn try_new(params: Params) -> Result<Self> {
        params.validate(ModelKind::Quarantine)?;
        Ok(Self::new(params))
    }

    /// S * (1 - (1 - k / (R + S))^(q * I))
    pub fn effective_contacts(&self) -> Real {
        quarantine_contacts(
            self.susceptible,
            self.recovered,
            self.params.attendants(),
            self.params.quarantine_percent() * self.infected,
        )
    }

    pub fn rate_susceptible(&self) -> Real {
        let p = &self.params;
        let quarantined = p.alpha() * self.infected * self.effective_contacts();
        let direct = p.alpha() * (1.0 - p.quarantine_percent()) * self.infected * self.susceptible;
        -(quarantined + direct) * p.time_step()
    }

    pub fn rate_infected(&self) -> Real {
        -self.rate_susceptible() - self.resolved()
    }

    pub fn rate_recovered(&self) -> Real {
        (1.0 - self.params.death_rate()) * self.resolved()
    }

    pub fn rate_dead(&self) -> Real {
        self.params.death_rate() * self.resolved()
    }

    /// Infected individuals that recover or die in the next step.
    fn resolved(&self) -> Real {
        self.params.beta() * self.infected * self.params.time_step()
    }
}

impl CompartmentModel for QuarantineSIR {
    fn kind(&self) -> ModelKind {
        ModelKind::Quarantine
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

    fn dead(&self) -> Option<Real> {
        Some(self.dead)
    }

    fn rates(&self) -> Rates {
        Rates {
            susceptible: self.rate_susceptible(),
            infected: self.rate_infected(),
            recovered: self.rate_recovered(),
            dead: self.rate_dead(),
        }
    }

    fn advance(&mut self) {
        let rates = self.rates();
        self.susceptible += rates.susceptible;
        self.infected += rates.infected;
        self.recovered += rates.recovered;
        self.dead += rates.dead;
        self.time += self.params.time_step();
    }
}

impl Display for QuarantineSIR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
