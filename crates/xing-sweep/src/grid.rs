//! Dense (L, N) efficiency grid for surface rendering.
//!
//! # Layout
//!
//! Axes are the sorted unique L and N values found in the sweep output.
//! Values are row-major with one row per N:
//!
//!   values[n_index * cycle_lengths.len() + l_index]
//!
//! A cell with no matching point holds [`DEFAULT_EFFICIENCY`].  That is a
//! fill value for drawing a complete surface, not a simulated result; use
//! [`EfficiencyGrid::is_simulated`] to tell them apart.

use rustc_hash::FxHashMap;

use crate::SurfacePoint;

/// Efficiency reported for (L, N) pairs absent from the sweep output.
pub const DEFAULT_EFFICIENCY: f64 = 0.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EfficiencyGrid {
    cycle_lengths: Vec<f64>,
    arrival_rates: Vec<f64>,
    values:        Vec<f64>,
    simulated:     Vec<bool>,
    l_index:       FxHashMap<u64, usize>,
    n_index:       FxHashMap<u64, usize>,
}

impl EfficiencyGrid {
    /// Build the grid.  If the same (L, N) pair appears more than once, the
    /// first occurrence wins.
    pub fn from_points(points: &[SurfacePoint]) -> Self {
        let cycle_lengths = sorted_unique(points.iter().map(|p| p.cycle_length));
        let arrival_rates = sorted_unique(points.iter().map(|p| p.arrival_rate));
        let cols = cycle_lengths.len();
        let cells = cols * arrival_rates.len();

        let mut grid = Self {
            values: vec![DEFAULT_EFFICIENCY; cells],
            simulated: vec![false; cells],
            l_index: axis_index(&cycle_lengths),
            n_index: axis_index(&arrival_rates),
            cycle_lengths,
            arrival_rates,
        };

        for p in points {
            let Some(cell) = grid.cell(p.cycle_length, p.arrival_rate) else {
                continue;
            };
            if !grid.simulated[cell] {
                grid.values[cell] = p.efficiency;
                grid.simulated[cell] = true;
            }
        }
        grid
    }

    /// Efficiency at exactly (L, N), or [`DEFAULT_EFFICIENCY`] if the pair
    /// was not simulated or is off the grid.
    pub fn get(&self, cycle_length: f64, arrival_rate: f64) -> f64 {
        self.cell(cycle_length, arrival_rate)
            .map_or(DEFAULT_EFFICIENCY, |c| self.values[c])
    }

    /// Whether (L, N) holds a simulated value rather than the fill default.
    pub fn is_simulated(&self, cycle_length: f64, arrival_rate: f64) -> bool {
        self.cell(cycle_length, arrival_rate)
            .is_some_and(|c| self.simulated[c])
    }

    /// Sorted unique L values (columns).
    pub fn cycle_lengths(&self) -> &[f64] {
        &self.cycle_lengths
    }

    /// Sorted unique N values (rows).
    pub fn arrival_rates(&self) -> &[f64] {
        &self.arrival_rates
    }

    /// Row `n_index` (one value per L).
    pub fn row(&self, n_index: usize) -> &[f64] {
        let cols = self.cycle_lengths.len();
        &self.values[n_index * cols..(n_index + 1) * cols]
    }

    /// Iterate rows as `(N, values)`.
    pub fn rows(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.arrival_rates
            .iter()
            .enumerate()
            .map(|(i, &n)| (n, self.row(i)))
    }

    /// Number of cells filled by the default rather than a simulated point.
    pub fn missing_cells(&self) -> usize {
        self.simulated.iter().filter(|s| !**s).count()
    }

    fn cell(&self, cycle_length: f64, arrival_rate: f64) -> Option<usize> {
        let li = *self.l_index.get(&key(cycle_length))?;
        let ni = *self.n_index.get(&key(arrival_rate))?;
        Some(ni * self.cycle_lengths.len() + li)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Bit pattern used as an exact-match key; `+ 0.0` folds `-0.0` into `0.0`.
#[inline]
fn key(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(f64::total_cmp);
    v.dedup_by(|a, b| key(*a) == key(*b));
    v
}

fn axis_index(axis: &[f64]) -> FxHashMap<u64, usize> {
    axis.iter().enumerate().map(|(i, &v)| (key(v), i)).collect()
}
