mod epicurve;
mod simulation;
mod sweep;
pub use epicurve::*;
pub use simulation::*;
pub use sweep::*;

use crate::{
    error::Result,
    models::{AnyModel, Masking, ModelKind},
    params::Params,
    prelude::Real,
};
use getset::{CopyGetters, Setters};
use serde::{Deserialize, Serialize};

/// Choice of model variant and loop termination for a run.
#[derive(CopyGetters, Setters, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[getset(get_copy = "pub", set = "pub")]
#[serde(default)]
pub struct RunSettings {
    model: ModelKind,
    masking: Masking,
    threshold: Real,
    max_steps: usize,
}

impl RunSettings {
    pub fn new(model: ModelKind) -> Self {
        RunSettings {
            model,
            ..Default::default()
        }
    }

    /// Build a simulation of the configured variant from params.
    pub fn build(&self, params: Params) -> Result<Simulation<AnyModel>> {
        let model = AnyModel::new(self.model, params, self.masking)?;
        let mut sim = Simulation::new(model);
        sim.set_threshold(self.threshold).set_max_steps(self.max_steps);
        Ok(sim)
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        RunSettings {
            model: ModelKind::default(),
            masking: Masking::default(),
            threshold: DEFAULT_THRESHOLD,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
