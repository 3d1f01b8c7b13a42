//! Explicitly passed RNG handle.
//!
//! # Determinism strategy
//!
//! There is no process-wide generator.  Every sweep point owns a `SmallRng`
//! seeded by:
//!
//!   seed = run_seed XOR (point_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive point indices uniformly across the seed space.
//! This means:
//!
//! - Sweep points never share RNG state, so they can be evaluated on any
//!   thread in any order without correlated draws.
//! - A sweep produces the same collection whether it runs sequentially or
//!   on the Rayon pool.
//! - Replications inside one point draw from that point's generator in
//!   sequence, so they are independent trials.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A seedable generator owned by exactly one evaluation context.
///
/// `SimRng` is `Send` but deliberately not shared: parallel workers each
/// derive their own with [`SimRng::for_point`].
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  This is the non-reproducible default used when
    /// the caller does not ask for a fixed seed.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Generator for sweep point `index` of a run seeded with `run_seed`.
    pub fn for_point(run_seed: u64, index: usize) -> Self {
        let seed = run_seed ^ (index as u64).wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand_distr` distribution
    /// types (`dist.sample(rng.inner())`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}
