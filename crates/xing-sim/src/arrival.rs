//! Arrival models: how many units join the queue during one interval.

use rand_distr::{Distribution, Poisson};
use xing_core::SimRng;

/// Draws the number of new arrivals during one interval.
///
/// Implementations must be pure apart from the generator they are handed,
/// so the same model can be shared by every worker in a parallel sweep.
pub trait ArrivalModel: Send + Sync {
    /// Arrivals during an interval of length `interval` at base `rate`.
    fn draw_arrivals(&self, rate: f64, interval: f64, rng: &mut SimRng) -> u64;
}

/// Poisson-distributed arrivals with mean `rate × interval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PoissonArrivals;

impl ArrivalModel for PoissonArrivals {
    #[inline]
    fn draw_arrivals(&self, rate: f64, interval: f64, rng: &mut SimRng) -> u64 {
        let mean = rate * interval;
        // Poisson::new rejects a zero mean; zero arrivals is the exact answer.
        if !(mean > 0.0 && mean.is_finite()) {
            return 0;
        }
        match Poisson::new(mean) {
            Ok(dist) => {
                let draw: f64 = dist.sample(rng.inner());
                draw.max(0.0) as u64
            }
            Err(_) => 0,
        }
    }
}
