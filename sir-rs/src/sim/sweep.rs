use super::RunSettings;
use crate::{analytics::TrajectoryReport, error::Result, params::Params, prelude::Real};
use log::*;
use rayon::prelude::*;

/// Run each scenario to completion and summarize it.
///
/// Runs are independent, so they are distributed across threads. Results keep
/// the order of the input.
pub fn sweep(settings: RunSettings, scenarios: &[Params]) -> Vec<Result<TrajectoryReport>> {
    info!(
        "sweeping {} scenarios of the {} model",
        scenarios.len(),
        settings.model()
    );
    scenarios
        .par_iter()
        .map(|&params| {
            let mut sim = settings.build(params)?;
            sim.run()?;
            sim.report()
        })
        .collect()
}

/// Sweep a single parameter. Each value is applied to a copy of base with
/// set. Returns pairs of (value, report).
pub fn sweep_param<F>(
    settings: RunSettings,
    base: Params,
    values: &[Real],
    set: F,
) -> Vec<(Real, Result<TrajectoryReport>)>
where
    F: Fn(&mut Params, Real),
{
    let scenarios: Vec<Params> = values
        .iter()
        .map(|&x| {
            let mut params = base;
            set(&mut params, x);
            params
        })
        .collect();
    values
        .iter()
        .cloned()
        .zip(sweep(settings, &scenarios))
        .collect()
}
