//! Service capacity per interval.

/// Units that can be served during an interval of length `interval` when one
/// service cycle of length `cycle_length` serves `capacity` units.
///
/// | Interval            | Capacity          |
/// |---------------------|-------------------|
/// | `t < L`             | 0                 |
/// | `L ≤ t < 2L`        | `k`               |
/// | `2L ≤ t < 3L`       | `2k`              |
/// | `t ≥ 3L`            | `⌊t / L⌋ · k`     |
///
/// The comparisons are made against `2L` and `3L` as computed in `f64`, and
/// the last tier uses floating division, so values a rounding error away
/// from a multiple of `L` land in whichever tier the arithmetic puts them.
#[inline]
pub fn capacity_for(interval: f64, cycle_length: f64, capacity: u64) -> u64 {
    if interval < cycle_length {
        0
    } else if interval < 2.0 * cycle_length {
        capacity
    } else if interval < 3.0 * cycle_length {
        capacity.saturating_mul(2)
    } else {
        let cycles = (interval / cycle_length).floor() as u64;
        cycles.saturating_mul(capacity)
    }
}
