use crate::prelude::Real;

///////////////////////////////////////////////////////////////////////////////
// Default scenario
///////////////////////////////////////////////////////////////////////////////

/// Number of individuals infected at t = 0.
pub const INITIAL_INFECTED: Real = 10.0;

pub const POPULATION: usize = 50_000;
pub const TRANSMISSION_RATE: Real = 0.000_005;
pub const INFECTIOUS_PERIOD: Real = 7.0;
pub const TIME_STEP: Real = 1.0;
pub const DEATH_RATE: Real = 0.1;
pub const ATTENDANTS_PER_INFECTED: Real = 0.5;
pub const QUARANTINE_PERCENT: Real = 0.7;
pub const INCUBATION_PERIOD: Real = 3.0;

///////////////////////////////////////////////////////////////////////////////
// Transmission coefficients
///////////////////////////////////////////////////////////////////////////////

/// Symptomatic individuals transmit ten times as much through the quarantine
/// channel (close contact with attendants).
pub const QUARANTINE_CHANNEL_FACTOR: Real = 10.0;

/// High-grade masks for quarantined individuals cut transmission by 97%.
pub const MASKED_QUARANTINE_CHANNEL_FACTOR: Real = 0.03;

/// Cheap masks cut general transmission by 50%.
pub const MASKED_DIRECT_FACTOR: Real = 0.5;
