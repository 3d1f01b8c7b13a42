//! Sweep observer trait for progress reporting.

use std::time::Duration;

/// Callbacks invoked by [`SweepRunner`][crate::SweepRunner] while a sweep
/// runs.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// With the `parallel` feature, points are evaluated on the Rayon pool in
/// ordered batches; `on_point_end` fires in enumeration order as each batch
/// completes, so progress still arrives while the sweep runs.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SweepObserver for Progress {
///     fn on_point_end(&mut self, index: usize, total: usize, _efficiency: f64) {
///         if (index + 1) % 10 == 0 {
///             println!("{}/{total}", index + 1);
///         }
///     }
/// }
/// ```
pub trait SweepObserver {
    /// Called once, after validation, before the first point is evaluated.
    fn on_sweep_start(&mut self, _total: usize) {}

    /// Called after point `index` (0-based, enumeration order) is evaluated.
    fn on_point_end(&mut self, _index: usize, _total: usize, _efficiency: f64) {}

    /// Called once after the last point.
    fn on_sweep_end(&mut self, _points: usize, _elapsed: Duration) {}
}

/// A [`SweepObserver`] that does nothing.
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}
