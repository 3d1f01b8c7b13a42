//! Framework error type.
//!
//! Downstream crates either return `XingError` directly (the simulation and
//! sweep crates) or wrap it as one variant of their own enum (`xing-io`).

use thiserror::Error;

/// The top-level error type for `xing-core` and the simulation crates.
#[derive(Debug, Error)]
pub enum XingError {
    /// A numeric input is outside its domain (L ≤ 0, k = 0, N < 0, …).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name:   &'static str,
        reason: String,
    },

    /// A sweep axis produced no values.
    #[error("sweep axis `{0}` is empty")]
    EmptySweep(&'static str),

    /// The external interval source could not be supplied.
    #[error("interval data unavailable: {0}")]
    DataUnavailable(String),
}

impl XingError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        XingError::InvalidParameter { name, reason: reason.into() }
    }
}

/// Shorthand result type for all `xing-*` crates.
pub type XingResult<T> = Result<T, XingError>;

/// Reject NaN and infinities for a named parameter.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> XingResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(XingError::invalid(name, format!("must be finite, got {value}")))
    }
}
