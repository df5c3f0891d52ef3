mod constants;
pub use constants::*;

use crate::{
    error::{Result, SirError},
    models::ModelKind,
    prelude::Real,
};
use getset::{CopyGetters, Setters};
use serde::{Deserialize, Serialize};

/// Scenario parameters shared by all model variants.
///
/// The basic model only reads population, alpha, beta and time_step. The
/// remaining fields are used by the quarantine and incubation variants.
/// Models copy their params at construction, so changing a Params value never
/// affects a running model.
#[derive(CopyGetters, Setters, Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[getset(get_copy = "pub", set = "pub")]
#[serde(default)]
pub struct Params {
    /// Total population size.
    population: usize,

    /// Transmission coefficient. Multiplies population-scale products, so it
    /// is usually very small.
    alpha: Real,

    /// Recovery coefficient, i.e., the inverse of the mean infectious period.
    beta: Real,

    /// Size of each Euler step.
    time_step: Real,

    /// Fraction of resolved cases that die.
    death_rate: Real,

    /// Expected number of attendants each quarantined infected individual
    /// interacts with.
    attendants: Real,

    /// Fraction of the population that quarantines.
    quarantine_percent: Real,

    /// Fraction of asymptomatic individuals that develop symptoms per unit
    /// time.
    symptom_rate: Real,
}

impl Params {
    /// Basic SIR params. Extended fields keep their default values.
    pub fn new(population: usize, alpha: Real, beta: Real, time_step: Real) -> Self {
        Params {
            population,
            alpha,
            beta,
            time_step,
            ..Default::default()
        }
    }

    /// Mean infectious period, 1 / beta.
    pub fn infectious_period(&self) -> Real {
        1.0 / self.beta
    }

    /// Set mean infectious period and update the recovery rate
    pub fn set_infectious_period(&mut self, value: Real) -> &mut Self {
        self.beta = 1.0 / value;
        return self;
    }

    /// Mean incubation period, 1 / symptom_rate.
    pub fn incubation_period(&self) -> Real {
        1.0 / self.symptom_rate
    }

    /// Set mean incubation period and update the symptom development rate
    pub fn set_incubation_period(&mut self, value: Real) -> &mut Self {
        self.symptom_rate = 1.0 / value;
        return self;
    }

    /// Population as a real-valued count.
    pub fn total(&self) -> Real {
        self.population as Real
    }

    /// Basic reproduction number alpha * N / beta of the SIR model. The
    /// epidemic only grows when this is above 1.
    pub fn reproduction_number(&self) -> Real {
        self.alpha * self.total() / self.beta
    }

    /// Check every parameter read by the given model variant.
    pub fn validate(&self, kind: ModelKind) -> Result<()> {
        if self.total() <= INITIAL_INFECTED {
            return Err(SirError::InvalidParam {
                name: "population",
                value: self.total(),
                reason: "must exceed the initial number of infected",
            });
        }
        positive("alpha", self.alpha)?;
        positive("beta", self.beta)?;
        positive("time_step", self.time_step)?;

        if kind == ModelKind::Basic {
            return Ok(());
        }
        fraction("death_rate", self.death_rate)?;
        fraction("quarantine_percent", self.quarantine_percent)?;
        if !(self.attendants >= 0.0) {
            return Err(SirError::InvalidParam {
                name: "attendants",
                value: self.attendants,
                reason: "must be non-negative",
            });
        }

        if kind == ModelKind::Incubation {
            positive("symptom_rate", self.symptom_rate)?;
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: Real) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SirError::InvalidParam {
            name,
            value,
            reason: "must be positive",
        })
    }
}

fn fraction(name: &'static str, value: Real) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SirError::InvalidParam {
            name,
            value,
            reason: "must be within [0, 1]",
        })
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            population: POPULATION,
            alpha: TRANSMISSION_RATE,
            beta: 1.0 / INFECTIOUS_PERIOD,
            time_step: TIME_STEP,
            death_rate: DEATH_RATE,
            attendants: ATTENDANTS_PER_INFECTED,
            quarantine_percent: QUARANTINE_PERCENT,
            symptom_rate: 1.0 / INCUBATION_PERIOD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn roundtrip() {
        let params = Params::default();
        let data = toml::to_string(&params).unwrap();
        let params_: Params = toml::from_str(&data).unwrap();
        assert_eq!(params, params_);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let params: Params = toml::from_str("population = 1000\ntime_step = 0.5").unwrap();
        assert_eq!(params.population(), 1000);
        assert_approx_eq!(params.time_step(), 0.5);
        assert_approx_eq!(params.alpha(), TRANSMISSION_RATE);
    }

    #[test]
    fn periods() {
        let mut params = Params::default();
        params.set_infectious_period(4.0).set_incubation_period(2.0);
        assert_approx_eq!(params.beta(), 0.25);
        assert_approx_eq!(params.symptom_rate(), 0.5);
        assert_approx_eq!(params.infectious_period(), 4.0);
        assert_approx_eq!(params.reproduction_number(), 0.000_005 * 50_000.0 * 4.0);
    }

    #[test]
    fn validation() {
        let params = Params::default();
        assert!(params.validate(ModelKind::Incubation).is_ok());

        let mut bad = params;
        bad.set_quarantine_percent(1.5);
        assert!(bad.validate(ModelKind::Basic).is_ok());
        assert!(matches!(
            bad.validate(ModelKind::Quarantine),
            Err(SirError::InvalidParam { name: "quarantine_percent", .. })
        ));

        let mut bad = params;
        bad.set_population(10);
        assert!(bad.validate(ModelKind::Basic).is_err());

        let mut bad = params;
        bad.set_symptom_rate(0.0);
        assert!(bad.validate(ModelKind::Quarantine).is_ok());
        assert!(bad.validate(ModelKind::Incubation).is_err());

        let mut bad = params;
        bad.set_time_step(-1.0);
        assert!(bad.validate(ModelKind::Basic).is_err());
    }
}
