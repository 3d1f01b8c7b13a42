//! Validated per-run simulation parameters.
//!
//! Validation happens here, at the boundary.  Once a `SimulationParameters`
//! exists, the simulator's hot loop trusts it without further checks.

use crate::error::ensure_finite;
use crate::{XingError, XingResult};

/// {N, L, k, replications} for one simulation call.
///
/// Fields are private so the only way to obtain a value is through
/// [`SimulationParameters::new`] (or the `with_*` helpers, which re-validate).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationParameters {
    arrival_rate: f64,
    cycle_length: f64,
    capacity:     u64,
    replications: u32,
}

impl SimulationParameters {
    /// Validate and construct.
    ///
    /// | Parameter      | Domain            |
    /// |----------------|-------------------|
    /// | `arrival_rate` | finite, ≥ 0       |
    /// | `cycle_length` | finite, > 0       |
    /// | `capacity`     | ≥ 1 per cycle     |
    /// | `replications` | ≥ 1               |
    pub fn new(
        arrival_rate: f64,
        cycle_length: f64,
        capacity:     u64,
        replications: u32,
    ) -> XingResult<Self> {
        ensure_finite("arrival_rate", arrival_rate)?;
        if arrival_rate < 0.0 {
            return Err(XingError::invalid(
                "arrival_rate",
                format!("must be non-negative, got {arrival_rate}"),
            ));
        }
        validate_cycle_length(cycle_length)?;
        if capacity == 0 {
            return Err(XingError::invalid("capacity", "must be at least 1 unit per cycle"));
        }
        if replications == 0 {
            return Err(XingError::invalid("replications", "must be at least 1"));
        }
        Ok(Self { arrival_rate, cycle_length, capacity, replications })
    }

    /// Same parameters with a different service-cycle length.
    pub fn with_cycle_length(self, cycle_length: f64) -> XingResult<Self> {
        Self::new(self.arrival_rate, cycle_length, self.capacity, self.replications)
    }

    /// Same parameters with a different arrival rate.
    pub fn with_arrival_rate(self, arrival_rate: f64) -> XingResult<Self> {
        Self::new(arrival_rate, self.cycle_length, self.capacity, self.replications)
    }

    /// Arrival rate N (units per unit of interval time).
    #[inline]
    pub fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    /// Service-cycle length L.
    #[inline]
    pub fn cycle_length(&self) -> f64 {
        self.cycle_length
    }

    /// Units served per full cycle, k.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    #[inline]
    pub fn replications(&self) -> u32 {
        self.replications
    }
}

pub(crate) fn validate_cycle_length(cycle_length: f64) -> XingResult<()> {
    ensure_finite("cycle_length", cycle_length)?;
    if cycle_length <= 0.0 {
        return Err(XingError::invalid(
            "cycle_length",
            format!("must be positive, got {cycle_length}"),
        ));
    }
    Ok(())
}
