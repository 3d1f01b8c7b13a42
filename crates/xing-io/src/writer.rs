//! The `ResultWriter` trait implemented by result backends.

use xing_sweep::{EfficiencyGrid, EfficiencyPoint, SurfacePoint};

use crate::IoResult;

/// Sink for sweep results.
pub trait ResultWriter {
    /// Write a 1-D efficiency curve (L, efficiency, optimal flag).
    fn write_curve(&mut self, points: &[EfficiencyPoint]) -> IoResult<()>;

    /// Write surface points in enumeration order (L, N, efficiency).
    fn write_surface(&mut self, points: &[SurfacePoint]) -> IoResult<()>;

    /// Write the dense grid reconstructed from a surface sweep.
    fn write_grid(&mut self, grid: &EfficiencyGrid) -> IoResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> IoResult<()>;
}
