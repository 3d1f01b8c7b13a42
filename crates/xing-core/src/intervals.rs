//! The observed inter-arrival time series.

use std::ops::Deref;
use std::sync::Arc;

use crate::{XingError, XingResult};

/// An ordered, immutable sequence of positive elapsed times.
///
/// Loaded once and then shared by every replication and every sweep point.
/// Cloning only bumps a reference count, so a clone can be handed to each
/// worker thread.
///
/// The empty series is valid: every simulation over it yields `(0, 0)`.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalSeries(Arc<[f64]>);

impl IntervalSeries {
    /// Build a series, rejecting non-finite and non-positive values.
    pub fn new(values: impl Into<Vec<f64>>) -> XingResult<Self> {
        let values = values.into();
        if let Some((i, &v)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(v.is_finite() && v > 0.0))
        {
            return Err(XingError::InvalidParameter {
                name:   "interval",
                reason: format!("value #{i} must be positive and finite, got {v}"),
            });
        }
        Ok(IntervalSeries(values.into()))
    }

    /// The degenerate series substituted when no data could be loaded.
    pub fn empty() -> Self {
        IntervalSeries(Arc::from(Vec::new()))
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Sum of all intervals (the observed time span).
    pub fn total_duration(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Default for IntervalSeries {
    fn default() -> Self {
        IntervalSeries::empty()
    }
}

impl Deref for IntervalSeries {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

