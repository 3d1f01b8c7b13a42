//! Sweep plans: the parameter grid a runner enumerates.
//!
//! Plans are validated as a whole before any simulation starts.  One bad
//! value anywhere on an axis fails the sweep; no point is silently skipped.

use xing_core::{SimulationParameters, XingError, XingResult};

/// 1-D sweep over service-cycle lengths at a fixed arrival rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep1d {
    pub arrival_rate:  f64,
    /// Enumerated in order; the operating point is the last optimal entry,
    /// so callers normally pass these in increasing order.
    pub cycle_lengths: Vec<f64>,
    pub capacity:      u64,
    /// Half-width of the tolerance band around efficiency 1.
    pub threshold:     f64,
    pub replications:  u32,
}

impl Sweep1d {
    /// Parameters for every point, in enumeration order.
    pub fn points(&self) -> XingResult<Vec<SimulationParameters>> {
        validate_threshold(self.threshold)?;
        if self.cycle_lengths.is_empty() {
            return Err(XingError::EmptySweep("cycle_length"));
        }
        self.cycle_lengths
            .iter()
            .map(|&l| SimulationParameters::new(self.arrival_rate, l, self.capacity, self.replications))
            .collect()
    }
}

/// Sweep over the full (N, L) product.  Enumeration is outer N, inner L.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweep3d {
    pub arrival_rates: Vec<f64>,
    pub cycle_lengths: Vec<f64>,
    pub capacity:      u64,
    pub replications:  u32,
}

impl Sweep3d {
    /// Parameters for every (N, L) pair, outer N, inner L.
    pub fn points(&self) -> XingResult<Vec<SimulationParameters>> {
        if self.arrival_rates.is_empty() {
            return Err(XingError::EmptySweep("arrival_rate"));
        }
        if self.cycle_lengths.is_empty() {
            return Err(XingError::EmptySweep("cycle_length"));
        }
        let mut out = Vec::with_capacity(self.len());
        for &n in &self.arrival_rates {
            for &l in &self.cycle_lengths {
                out.push(SimulationParameters::new(n, l, self.capacity, self.replications)?);
            }
        }
        Ok(out)
    }

    /// `|Ns| × |Ls|`.
    pub fn len(&self) -> usize {
        self.arrival_rates.len() * self.cycle_lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate_threshold(threshold: f64) -> XingResult<()> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(())
    } else {
        Err(XingError::InvalidParameter {
            name:   "threshold",
            reason: format!("must be finite and non-negative, got {threshold}"),
        })
    }
}
