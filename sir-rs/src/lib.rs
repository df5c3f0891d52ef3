//! Discrete-time compartmental epidemic models.
//!
//! Three model variants share the [`models::CompartmentModel`] interface: the
//! basic SIR model, a quarantine model with mortality and a quarantine model
//! that splits infections into asymptomatic and symptomatic stages. Runs are
//! driven by [`sim::Simulation`] and summarized by [`analytics`].
pub mod analytics;
pub mod error;
pub mod models;
pub mod params;
pub mod prelude;
pub mod sim;
pub mod utils;
