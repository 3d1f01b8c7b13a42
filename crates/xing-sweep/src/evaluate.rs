//! Efficiency metric and per-point evaluators.

use xing_core::{IntervalSeries, SimRng, SimulationParameters};
use xing_sim::{ArrivalModel, CrossingSimulator};

// ── Result points ─────────────────────────────────────────────────────────────

/// One evaluated point of a 1-D sweep over the service-cycle length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EfficiencyPoint {
    pub cycle_length: f64,
    pub efficiency:   f64,
    /// `|efficiency − 1| ≤ threshold`.
    pub is_optimal:   bool,
}

/// One evaluated point of a sweep over (L, N).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfacePoint {
    pub cycle_length: f64,
    pub arrival_rate: f64,
    pub efficiency:   f64,
}

// ── Classification ───────────────────────────────────────────────────────────

/// Whether `efficiency` lies inside the closed band `[1 − threshold, 1 + threshold]`.
#[inline]
pub fn is_optimal(efficiency: f64, threshold: f64) -> bool {
    (efficiency - 1.0).abs() <= threshold
}

// ── Evaluators ────────────────────────────────────────────────────────────────

/// Simulate once with `params` and classify the aggregate efficiency.
pub fn evaluate_1d<A: ArrivalModel>(
    simulator: &CrossingSimulator<A>,
    params:    &SimulationParameters,
    intervals: &IntervalSeries,
    threshold: f64,
    rng:       &mut SimRng,
) -> EfficiencyPoint {
    let eff = simulator.simulate(params, intervals, rng).efficiency();
    EfficiencyPoint {
        cycle_length: params.cycle_length(),
        efficiency:   eff,
        is_optimal:   is_optimal(eff, threshold),
    }
}

/// Simulate once with `params`; no classification.
pub fn evaluate_3d<A: ArrivalModel>(
    simulator: &CrossingSimulator<A>,
    params:    &SimulationParameters,
    intervals: &IntervalSeries,
    rng:       &mut SimRng,
) -> SurfacePoint {
    SurfacePoint {
        cycle_length: params.cycle_length(),
        arrival_rate: params.arrival_rate(),
        efficiency:   simulator.simulate(params, intervals, rng).efficiency(),
    }
}
