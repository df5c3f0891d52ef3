use crate::{
    error::Result,
    params::Params,
    prelude::{round2, Real, Time},
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

mod incubation;
mod quarantine;
mod sir;
pub use incubation::*;
pub use quarantine::*;
pub use sir::*;

/// Closed set of model variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Basic,
    Quarantine,
    Incubation,
}

impl ModelKind {
    /// True for variants that track the dead compartment.
    pub fn tracks_deaths(self) -> bool {
        self != ModelKind::Basic
    }
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Incubation
    }
}

impl Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Basic => write!(f, "basic"),
            ModelKind::Quarantine => write!(f, "quarantine"),
            ModelKind::Incubation => write!(f, "incubation"),
        }
    }
}

/// Per-step change of each compartment, i.e., rate * time_step.
///
/// For the incubation model `infected` is the combined change of the
/// asymptomatic and symptomatic compartments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rates {
    pub susceptible: Real,
    pub infected: Real,
    pub recovered: Real,
    pub dead: Real,
}

impl Rates {
    /// Net population change. Zero up to rounding error for every model.
    pub fn net(&self) -> Real {
        self.susceptible + self.infected + self.recovered + self.dead
    }
}

/// State of a model at a single instant. This is the row type of an epicurve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub time: Time,
    pub susceptible: Real,
    pub infected: Real,
    pub recovered: Real,
    pub dead: Real,
}

impl Snapshot {
    /// Sum of all compartments.
    pub fn total(&self) -> Real {
        self.susceptible + self.infected + self.recovered + self.dead
    }

    /// True if any compartment went below zero. This happens when the step
    /// size is too large for the Euler integration.
    pub fn has_negative(&self) -> bool {
        self.susceptible < 0.0 || self.infected < 0.0 || self.recovered < 0.0 || self.dead < 0.0
    }
}

/// Common interface of the compartmental models.
///
/// A model owns its state and a copy of its parameters. Each call to
/// advance() performs one explicit Euler step: all rates are computed from the
/// current state before any compartment is modified.
pub trait CompartmentModel {
    fn kind(&self) -> ModelKind;

    fn params(&self) -> &Params;

    fn time(&self) -> Time;

    fn susceptible(&self) -> Real;

    /// All currently infected individuals.
    fn infected(&self) -> Real;

    fn recovered(&self) -> Real;

    /// Dead individuals, for models that track mortality.
    fn dead(&self) -> Option<Real> {
        None
    }

    /// Changes the next call to advance() will apply.
    fn rates(&self) -> Rates;

    /// Advance one time step.
    fn advance(&mut self);

    /// Sum of all compartments. Equals the initial population up to
    /// integration error.
    fn total(&self) -> Real {
        self.susceptible() + self.infected() + self.recovered() + self.dead().unwrap_or(0.0)
    }

    /// True while the infection is above the given threshold.
    fn is_active(&self, threshold: Real) -> bool {
        self.infected() > threshold
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            time: self.time(),
            susceptible: self.susceptible(),
            infected: self.infected(),
            recovered: self.recovered(),
            dead: self.dead().unwrap_or(0.0),
        }
    }

    /// Human readable summary, one field per line.
    fn summary(&self) -> String {
        let mut out = format!(
            "Time: {}\nSusceptible: {}\nInfected: {}\nRecovered: {}",
            self.time(),
            round2(self.susceptible()),
            round2(self.infected()),
            round2(self.recovered())
        );
        if let Some(dead) = self.dead() {
            out.push_str(&format!("\nDead: {}", round2(dead)));
        }
        return out;
    }
}

/// Expected number of susceptible individuals reached through the quarantine
/// channel.
///
/// Each quarantined source meets `attendants` individuals drawn from the
/// `susceptible + recovered` pool, repeated `exponent` times. An exhausted
/// pool yields no contacts.
pub(crate) fn quarantine_contacts(
    susceptible: Real,
    recovered: Real,
    attendants: Real,
    exponent: Real,
) -> Real {
    let pool = susceptible + recovered;
    if pool <= 0.0 {
        return 0.0;
    }
    let miss = (1.0 - attendants / pool).max(0.0);
    if miss == 0.0 {
        // Every attendant is reached. A non-positive exponent (no symptomatic
        // sources, or overshoot below zero) reaches nobody.
        return if exponent > 0.0 { susceptible } else { 0.0 };
    }
    susceptible * (1.0 - miss.powf(exponent))
}

/// A model of any variant. Use this when the variant is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyModel {
    Basic(BasicSIR),
    Quarantine(QuarantineSIR),
    Incubation(IncubationSIR),
}

macro_rules! dispatch {
    ($self:ident, $m:ident => $e:expr) => {
        match $self {
            AnyModel::Basic($m) => $e,
            AnyModel::Quarantine($m) => $e,
            AnyModel::Incubation($m) => $e,
        }
    };
}

impl AnyModel {
    /// Create a validated model of the given kind. Masking only affects the
    /// incubation model.
    pub fn new(kind: ModelKind, params: Params, masking: Masking) -> Result<Self> {
        Ok(match kind {
            ModelKind::Basic => AnyModel::Basic(BasicSIR::try_new(params)?),
            ModelKind::Quarantine => AnyModel::Quarantine(QuarantineSIR::try_new(params)?),
            ModelKind::Incubation => {
                AnyModel::Incubation(IncubationSIR::try_new(params)?.with_masking(masking))
            }
        })
    }
}

impl CompartmentModel for AnyModel {
    fn kind(&self) -> ModelKind {
        dispatch!(self, m => m.kind())
    }
    fn params(&self) -> &Params {
        dispatch!(self, m => m.params())
    }
    fn time(&self) -> Time {
        dispatch!(self, m => m.time())
    }
    fn susceptible(&self) -> Real {
        dispatch!(self, m => m.susceptible())
    }
    fn infected(&self) -> Real {
        dispatch!(self, m => m.infected())
    }
    fn recovered(&self) -> Real {
        dispatch!(self, m => m.recovered())
    }
    fn dead(&self) -> Option<Real> {
        dispatch!(self, m => m.dead())
    }
    fn rates(&self) -> Rates {
        dispatch!(self, m => m.rates())
    }
    fn advance(&mut self) {
        dispatch!(self, m => m.advance())
    }
}

impl Display for AnyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
