//! Inclusive linear ranges for sweep axes.
//!
//! The control surface describes each axis as `start`, `end`, `step`.
//! Values are generated as `start + i * step` rather than by repeated
//! addition, so long ranges do not drift, and the endpoint is included when
//! `(end - start) / step` is within rounding of an integer.

use crate::error::ensure_finite;
use crate::{XingError, XingResult};

/// Slack applied to the step count so `0.01..=1.0 step 0.01` yields 100
/// values despite `0.99 / 0.01` evaluating to `98.99999999999999`.
const STEP_EPSILON: f64 = 1e-9;

/// Largest number of values a single axis may yield.
pub const MAX_RANGE_LEN: usize = 1_000_000;

/// `start..=end` stepped by `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRange {
    pub start: f64,
    pub end:   f64,
    pub step:  f64,
}

impl LinearRange {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Check that the range is finite, ordered, has a positive step, and
    /// yields at most [`MAX_RANGE_LEN`] values.
    pub fn validate(&self, axis: &'static str) -> XingResult<()> {
        ensure_finite(axis, self.start)?;
        ensure_finite(axis, self.end)?;
        ensure_finite(axis, self.step)?;
        if self.step <= 0.0 {
            return Err(XingError::InvalidParameter {
                name:   axis,
                reason: format!("step must be positive, got {}", self.step),
            });
        }
        if self.end < self.start {
            return Err(XingError::InvalidParameter {
                name:   axis,
                reason: format!("end {} is below start {}", self.end, self.start),
            });
        }
        let steps = self.steps();
        if !steps.is_finite() || steps >= MAX_RANGE_LEN as f64 {
            return Err(XingError::InvalidParameter {
                name:   axis,
                reason: format!(
                    "step {} over {}..={} yields more than {MAX_RANGE_LEN} values",
                    self.step, self.start, self.end
                ),
            });
        }
        Ok(())
    }

    /// Number of values the range yields.  Only meaningful after
    /// [`validate`](Self::validate) has succeeded; saturates otherwise.
    pub fn len(&self) -> usize {
        (self.steps() as usize).saturating_add(1)
    }

    /// Whole steps between `start` and `end`, before the cast to a count.
    fn steps(&self) -> f64 {
        ((self.end - self.start) / self.step + STEP_EPSILON).floor()
    }

    /// Always `false` for a validated range; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate and materialize the range.
    pub fn values(&self, axis: &'static str) -> XingResult<Vec<f64>> {
        self.validate(axis)?;
        Ok((0..self.len())
            .map(|i| self.start + i as f64 * self.step)
            .collect())
    }
}
