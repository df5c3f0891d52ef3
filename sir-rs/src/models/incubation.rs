use super::{quarantine_contacts, CompartmentModel, ModelKind, Rates};
use crate::{
    error::Result,
    params::*,
    prelude::{Real, Time},
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Transmission-reduction policy for the incubation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Masking {
    Off,
    On,
}

impl Masking {
    /// Coefficients of the quarantine channel and of direct contact.
    pub fn coefficients(self) -> Transmission {
        match self {
            Masking::Off => Transmission {
                quarantine_channel: QUARANTINE_CHANNEL_FACTOR,
                direct: 1.0,
            },
            Masking::On => Transmission {
                quarantine_channel: MASKED_QUARANTINE_CHANNEL_FACTOR,
                direct: MASKED_DIRECT_FACTOR,
            },
        }
    }
}

impl Default for Masking {
    fn default() -> Self {
        Masking::Off
    }
}

impl From<bool> for Masking {
    fn from(masked: bool) -> Self {
        if masked {
            Masking::On
        } else {
            Masking::Off
        }
    }
}

/// Multipliers applied to alpha in each transmission channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transmission {
    pub quarantine_channel: Real,
    pub direct: Real,
}

/// Quarantine model with an incubation stage.
///
/// Infected individuals start asymptomatic and circulate freely. They develop
/// symptoms at rate sigma, after which a fraction q of them quarantines. Only
/// symptomatic cases resolve into recovered or dead.
#[derive(Debug, Clone, PartialEq)]
pub struct IncubationSIR {
    susceptible: Real,
    asymptomatic: Real,
    symptomatic: Real,
    recovered: Real,
    dead: Real,
    time: Time,
    params: Params,
    masking: Masking,
}

impl IncubationSIR {
    /// Create model at t = 0 with 10 asymptomatic individuals. Params are not
    /// validated, see try_new().
    pub fn new(params: Params) -> Self {
        IncubationSIR {
            susceptible: params.total() - INITIAL_INFECTED,
            asymptomatic: INITIAL_INFECTED,
            symptomatic: 0.0,
            recovered: 0.0,
            dead: 0.0,
            time: 0.0,
            params,
            masking: Masking::Off,
        }
    }

    /// Create model after validating params.
    pub fn try_new(params: Params) -> Result<Self> {
        params.validate(ModelKind::Incubation)?;
        Ok(Self::new(params))
    }

    /// Select the masking policy used by advance().
    pub fn with_masking(mut self, masking: Masking) -> Self {
        self.masking = masking;
        return self;
    }

    pub fn masking(&self) -> Masking {
        self.masking
    }

    pub fn asymptomatic(&self) -> Real {
        self.asymptomatic
    }

    pub fn symptomatic(&self) -> Real {
        self.symptomatic
    }

    /// S * (1 - (1 - k / (R + S))^(q * IS))
    pub fn effective_contacts(&self) -> Real {
        quarantine_contacts(
            self.susceptible,
            self.recovered,
            self.params.attendants(),
            self.params.quarantine_percent() * self.symptomatic,
        )
    }

    /// Change of the susceptible population under the configured masking.
    pub fn rate_susceptible(&self) -> Real {
        self.rate_susceptible_with(self.masking)
    }

    /// Change of the susceptible population under the given masking policy.
    pub fn rate_susceptible_with(&self, masking: Masking) -> Real {
        let p = &self.params;
        let c = masking.coefficients();
        let quarantined =
            p.alpha() * c.quarantine_channel * self.symptomatic * self.effective_contacts();
        let spreaders = (1.0 - p.quarantine_percent()) * self.symptomatic + self.asymptomatic;
        let direct = p.alpha() * c.direct * spreaders * self.susceptible;
        -(quarantined + direct) * p.time_step()
    }

    pub fn rate_asymptomatic(&self) -> Real {
        self.rate_asymptomatic_with(self.masking)
    }

    /// New infections enter the asymptomatic compartment and leave it at
    /// symptom onset.
    pub fn rate_asymptomatic_with(&self, masking: Masking) -> Real {
        -self.rate_susceptible_with(masking) - self.onset()
    }

    pub fn rate_symptomatic(&self) -> Real {
        self.onset() - self.resolved()
    }

    pub fn rate_recovered(&self) -> Real {
        (1.0 - self.params.death_rate()) * self.resolved()
    }

    pub fn rate_dead(&self) -> Real {
        self.params.death_rate() * self.resolved()
    }

    fn onset(&self) -> Real {
        self.params.symptom_rate() * self.asymptomatic * self.params.time_step()
    }

    fn resolved(&self) -> Real {
        self.params.beta() * self.symptomatic * self.params.time_step()
    }
}

impl CompartmentModel for IncubationSIR {
    fn kind(&self) -> ModelKind {
        ModelKind::Incubation
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
        self.asymptomatic + self.symptomatic
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
            infected: self.rate_asymptomatic() + self.rate_symptomatic(),
            recovered: self.rate_recovered(),
            dead: self.rate_dead(),
        }
    }

    fn advance(&mut self) {
        let ds = self.rate_susceptible();
        let dia = self.rate_asymptomatic();
        let dis = self.rate_symptomatic();
        let dr = self.rate_recovered();
        let dd = self.rate_dead();

        self.susceptible += ds;
        self.asymptomatic += dia;
        self.symptomatic += dis;
        self.recovered += dr;
        self.dead += dd;
        self.time += self.params.time_step();
    }
}

impl Display for IncubationSIR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn initial_state() {
        let m = IncubationSIR::new(Params::new(1000, 0.0003, 0.1, 1.0));
        assert_eq!(m.asymptomatic(), 10.0);
        assert_eq!(m.symptomatic(), 0.0);
        assert_eq!(m.infected(), 10.0);
        assert_eq!(m.susceptible(), 990.0);
        assert_eq!(m.dead(), Some(0.0));
        assert_eq!(m.masking(), Masking::Off);
    }

    #[test]
    fn first_step() {
        let params = Params::default();
        let mut m = IncubationSIR::new(params);
        let new_cases = params.alpha() * 10.0 * 49_990.0;
        let onset = 10.0 / 3.0;

        // No symptomatic cases yet, so nobody quarantines or resolves
        assert_eq!(m.effective_contacts(), 0.0);
        assert_approx_eq!(m.rate_susceptible(), -new_cases);
        assert_approx_eq!(m.rate_asymptomatic(), new_cases - onset);
        assert_approx_eq!(m.rate_symptomatic(), onset);
        assert_eq!(m.rate_recovered(), 0.0);

        m.advance();
        assert_approx_eq!(m.asymptomatic(), 10.0 + new_cases - onset);
        assert_approx_eq!(m.symptomatic(), onset);
        assert_approx_eq!(m.infected(), 10.0 + new_cases);
        assert_approx_eq!(m.time(), 1.0);
    }

    #[test]
    fn symptomatic_drive_contacts() {
        let mut m = IncubationSIR::new(Params::default());
        m.symptomatic = 500.0;
        let expect = m.susceptible * (1.0 - (1.0 - 0.5 / 49_990.0 as Real).powf(0.7 * 500.0));
        assert_approx_eq!(m.effective_contacts(), expect, 1e-9);

        m.asymptomatic = 1e6;
        assert_approx_eq!(m.effective_contacts(), expect, 1e-9);
    }

    #[test]
    fn masking_coefficients() {
        let mut m = IncubationSIR::new(Params::default());
        assert_approx_eq!(
            m.rate_susceptible_with(Masking::On),
            0.5 * m.rate_susceptible_with(Masking::Off)
        );

        m.symptomatic = 200.0;
        let p = m.params;
        let eff = m.effective_contacts();
        let direct = p.alpha() * (0.3 * 200.0 + 10.0) * m.susceptible;
        assert_approx_eq!(
            m.rate_susceptible_with(Masking::Off),
            -(p.alpha() * 10.0 * 200.0 * eff + direct),
            1e-9
        );
        assert_approx_eq!(
            m.rate_susceptible_with(Masking::On),
            -(p.alpha() * 0.03 * 200.0 * eff + 0.5 * direct),
            1e-9
        );
        assert_approx_eq!(
            m.rate_asymptomatic_with(Masking::On),
            -m.rate_susceptible_with(Masking::On) - 10.0 / 3.0,
            1e-9
        );
    }

    #[test]
    fn masking_slows_the_epidemic() {
        let mut plain = IncubationSIR::new(Params::default());
        let mut masked = IncubationSIR::new(Params::default()).with_masking(true.into());
        for _ in 0..60 {
            plain.advance();
            masked.advance();
        }
        assert!(masked.susceptible() > plain.susceptible());
    }

    #[test]
    fn population_is_conserved() {
        let mut m = IncubationSIR::new(Params::default());
        for _ in 0..500 {
            let before = m.total();
            assert!(m.rates().net().abs() <= 1e-9 * before);
            m.advance();
            assert!((m.total() - before).abs() <= 1e-9 * before);
        }
    }
}
