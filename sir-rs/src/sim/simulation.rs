use super::Epicurve;
use crate::{
    analytics::TrajectoryReport,
    error::{Result, SirError},
    models::CompartmentModel,
    prelude::Real,
};
use getset::{CopyGetters, Getters, Setters};
use log::*;

/// Default infection level below which a run is considered finished.
pub const DEFAULT_THRESHOLD: Real = 1.0;

/// Default bound on the number of steps of a single run.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Simulation owns a model and records its epicurve while advancing it.
#[derive(Debug, Clone, CopyGetters, Getters, Setters)]
pub struct Simulation<M> {
    #[getset(get = "pub")]
    model: M,

    #[getset(get = "pub")]
    epicurve: Epicurve,

    /// Stop once infected <= threshold.
    #[getset(get_copy = "pub", set = "pub")]
    threshold: Real,

    /// Fail if the infection is still active after this many steps.
    #[getset(get_copy = "pub", set = "pub")]
    max_steps: usize,

    #[getset(get_copy = "pub")]
    n_iter: usize,

    /// Set once any compartment goes negative.
    #[getset(get_copy = "pub")]
    overshoot: bool,
}

impl<M: CompartmentModel> Simulation<M> {
    /// Create new simulation and record the initial state of the model.
    pub fn new(model: M) -> Self {
        let mut epicurve = Epicurve::new();
        epicurve.push(model.snapshot());
        Simulation {
            model,
            epicurve,
            threshold: DEFAULT_THRESHOLD,
            max_steps: DEFAULT_MAX_STEPS,
            n_iter: 0,
            overshoot: false,
        }
    }

    /// True while the infection is above threshold.
    pub fn is_active(&self) -> bool {
        self.model.is_active(self.threshold)
    }

    /// Advance model a single step and record the new state.
    pub fn step(&mut self) -> &mut Self {
        self.model.advance();
        self.n_iter += 1;

        let snapshot = self.model.snapshot();
        debug!(
            "step [{}]: t = {}, S = {:.2}, I = {:.2}, R = {:.2}, D = {:.2}",
            self.n_iter,
            snapshot.time,
            snapshot.susceptible,
            snapshot.infected,
            snapshot.recovered,
            snapshot.dead
        );
        if !self.overshoot && snapshot.has_negative() {
            warn!(
                "negative compartment at t = {} (step size {} may be too large)",
                snapshot.time,
                self.model.params().time_step()
            );
            self.overshoot = true;
        }
        self.epicurve.push(snapshot);
        return self;
    }

    /// Run until the infection drops to the threshold.
    pub fn run(&mut self) -> Result<&Epicurve> {
        self.run_with(|_| ())
    }

    /// Run until the infection drops to the threshold, calling f with the
    /// model after each step.
    pub fn run_with<F>(&mut self, mut f: F) -> Result<&Epicurve>
    where
        F: FnMut(&M),
    {
        while self.is_active() {
            if self.n_iter >= self.max_steps {
                return Err(SirError::NoTermination {
                    steps: self.n_iter,
                    time: self.model.time(),
                });
            }
            self.step();
            f(&self.model);
        }
        info!(
            "{} model finished after {} steps (t = {}, infected = {:.2})",
            self.model.kind(),
            self.n_iter,
            self.model.time(),
            self.model.infected()
        );
        Ok(&self.epicurve)
    }

    /// Summary statistics of the recorded epicurve.
    pub fn report(&self) -> Result<TrajectoryReport> {
        TrajectoryReport::from_epicurve(&self.epicurve)
    }

    /// Consume simulation and return the recorded epicurve.
    pub fn into_epicurve(self) -> Epicurve {
        self.epicurve
    }
}
