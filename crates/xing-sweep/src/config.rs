//! User-facing sweep configuration.
//!
//! Each config describes its axes as [`LinearRange`]s and converts into a
//! validated plan with `to_plan`.  `Default` reproduces the values the
//! control surface starts with.

use xing_core::{LinearRange, XingResult};

use crate::{Sweep1d, Sweep3d};

/// "Max L" mode: sweep L at a fixed arrival rate and pick the largest L whose
/// efficiency stays within `threshold` of 1.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct MaxLConfig {
    /// N — mean arrivals per unit of interval time.
    pub arrival_rate: f64,
    /// k — units served per full cycle.
    pub capacity:     u64,
    /// L axis.
    pub cycle_length: LinearRange,
    pub threshold:    f64,
    pub replications: u32,
}

impl Default for MaxLConfig {
    fn default() -> Self {
        Self {
            arrival_rate: 5.0,
            capacity:     5,
            cycle_length: LinearRange::new(0.01, 1.0, 0.01),
            threshold:    0.05,
            replications: 20,
        }
    }
}

impl MaxLConfig {
    pub fn to_plan(&self) -> XingResult<Sweep1d> {
        Ok(Sweep1d {
            arrival_rate:  self.arrival_rate,
            cycle_lengths: self.cycle_length.values("cycle_length")?,
            capacity:      self.capacity,
            threshold:     self.threshold,
            replications:  self.replications,
        })
    }
}

/// Surface mode: sweep the full (L, N) grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct SurfaceConfig {
    pub capacity:     u64,
    /// L axis.
    pub cycle_length: LinearRange,
    /// N axis.
    pub arrival_rate: LinearRange,
    pub replications: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            capacity:     5,
            cycle_length: LinearRange::new(0.01, 1.0, 0.01),
            arrival_rate: LinearRange::new(1.0, 10.0, 1.0),
            replications: 20,
        }
    }
}

impl SurfaceConfig {
    pub fn to_plan(&self) -> XingResult<Sweep3d> {
        Ok(Sweep3d {
            arrival_rates: self.arrival_rate.values("arrival_rate")?,
            cycle_lengths: self.cycle_length.values("cycle_length")?,
            capacity:      self.capacity,
            replications:  self.replications,
        })
    }
}
