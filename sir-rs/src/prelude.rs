pub use crate::analytics::{SirAnalytic, TrajectoryReport};
pub use crate::error::{Result, SirError};
pub use crate::models::*;
pub use crate::params::*;
pub use crate::sim::*;

/// Simulated time. This crate usually assumes time is measured in days, but
/// steps of any positive size are allowed so time is real valued.
pub type Time = f64;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
pub(crate) const INF: Real = Real::INFINITY;

/// Round to two decimal places, as used in textual summaries.
#[inline]
pub fn round2(x: Real) -> Real {
    (x * 100.0).round() / 100.0
}
