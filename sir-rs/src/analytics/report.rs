use super::{fastest_spread, peak};
use crate::{
    error::{Result, SirError},
    prelude::{Real, Time},
    sim::Epicurve,
};
use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Summary statistics of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct TrajectoryReport {
    /// Everybody ever infected: recovered + dead + still infected at the end.
    total_infected: Real,

    /// Largest number of simultaneously infected individuals.
    max_infected: Real,

    /// First time the infected curve reaches its maximum.
    max_infected_time: Time,

    /// Start of the step with the largest drop in susceptibles.
    fastest_spread_time: Time,

    /// Susceptibles lost during that step.
    fastest_spread: Real,

    /// Time of the last recorded state.
    duration: Time,

    /// Number of steps taken.
    steps: usize,

    /// Some compartment went negative, so monotonic depletion of susceptibles
    /// should not be trusted.
    overshoot: bool,
}

impl TrajectoryReport {
    pub fn from_epicurve(curve: &Epicurve) -> Result<Self> {
        let times = curve.times();
        let (fastest_spread_time, fastest_spread) = fastest_spread(times, curve.susceptible())?;
        let (max_infected_time, max_infected) = peak(times, curve.infected())?;
        let last = curve
            .tip()
            .ok_or(SirError::TrajectoryTooShort { len: 0 })?;

        Ok(TrajectoryReport {
            total_infected: last.recovered + last.dead + last.infected,
            max_infected,
            max_infected_time,
            fastest_spread_time,
            fastest_spread,
            duration: last.time,
            steps: curve.len() - 1,
            overshoot: curve.has_negative(),
        })
    }
}

impl Display for TrajectoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Infected: {}", self.total_infected.round())?;
        writeln!(
            f,
            "Maximum ill at once: {} (at time t={})",
            self.max_infected.round(),
            self.max_infected_time
        )?;
        writeln!(
            f,
            "Time of fastest spread: {} ({:.2} p/t)",
            self.fastest_spread_time, self.fastest_spread
        )?;
        write!(f, "Total lifespan of disease: {}", self.duration)?;
        if self.overshoot {
            write!(f, "\nWarning: negative compartments, reduce the time step")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snapshot;

    fn curve() -> Epicurve {
        let rows = [
            (0.0, 990.0, 10.0, 0.0, 0.0),
            (1.0, 960.0, 35.0, 4.0, 1.0),
            (2.0, 900.0, 80.0, 17.0, 3.0),
            (3.0, 870.0, 80.0, 44.0, 6.0),
            (4.0, 860.0, 50.0, 82.0, 8.0),
        ];
        rows.iter()
            .map(|&(time, susceptible, infected, recovered, dead)| Snapshot {
                time,
                susceptible,
                infected,
                recovered,
                dead,
            })
            .collect()
    }

    #[test]
    fn report_from_curve() {
        let report = TrajectoryReport::from_epicurve(&curve()).unwrap();
        assert_eq!(report.total_infected(), 140.0);
        assert_eq!(report.max_infected(), 80.0);
        assert_eq!(report.max_infected_time(), 2.0);
        assert_eq!(report.fastest_spread_time(), 1.0);
        assert_eq!(report.fastest_spread(), 60.0);
        assert_eq!(report.duration(), 4.0);
        assert_eq!(report.steps(), 4);
        assert!(!report.overshoot());
    }

    #[test]
    fn display() {
        let report = TrajectoryReport::from_epicurve(&curve()).unwrap();
        assert_eq!(
            report.to_string(),
            "Total Infected: 140\n\
             Maximum ill at once: 80 (at time t=2)\n\
             Time of fastest spread: 1 (60.00 p/t)\n\
             Total lifespan of disease: 4"
        );
    }

    #[test]
    fn short_curves_are_rejected() {
        let single: Epicurve = curve().iter().take(1).collect();
        assert!(matches!(
            TrajectoryReport::from_epicurve(&single),
            Err(SirError::TrajectoryTooShort { len: 1 })
        ));
    }
}
