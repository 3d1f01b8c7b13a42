//! `SweepRunner` — drives the evaluators over a sweep plan.

use std::time::Instant;

use xing_core::{IntervalSeries, SimRng, SimulationParameters, XingResult};
use xing_sim::{ArrivalModel, CrossingSimulator, PoissonArrivals};

use crate::{EfficiencyPoint, Sweep1d, Sweep3d, SurfacePoint, SweepObserver, evaluate_1d, evaluate_3d};

/// Parallel sweeps hand points to the pool in this many ordered batches.
#[cfg(feature = "parallel")]
const PROGRESS_CHUNKS: usize = 20;

/// Runs 1-D and 2-D sweeps over a shared interval series.
///
/// Point `i` of every sweep draws from `SimRng::for_point(seed, i)`, so a
/// fixed seed reproduces the whole collection regardless of whether the
/// `parallel` feature is enabled.
///
/// # Example
///
/// ```rust,ignore
/// let runner = SweepRunner::new(intervals).seed(42);
/// let curve = runner.sweep_1d(&plan_1d, &mut NoopObserver)?;
/// let surface = runner.sweep_3d(&plan_3d, &mut NoopObserver)?;
/// ```
pub struct SweepRunner<A: ArrivalModel = PoissonArrivals> {
    simulator: CrossingSimulator<A>,
    intervals: IntervalSeries,
    seed:      u64,
}

impl SweepRunner<PoissonArrivals> {
    /// Poisson arrivals and a seed drawn from OS entropy.
    pub fn new(intervals: IntervalSeries) -> Self {
        Self {
            simulator: CrossingSimulator::new(PoissonArrivals),
            intervals,
            seed: SimRng::from_entropy().random(),
        }
    }
}

impl<A: ArrivalModel> SweepRunner<A> {
    /// Fix the run seed for reproducible sweeps.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the arrival model.
    pub fn arrivals<B: ArrivalModel>(self, model: B) -> SweepRunner<B> {
        SweepRunner {
            simulator: CrossingSimulator::new(model),
            intervals: self.intervals,
            seed:      self.seed,
        }
    }

    /// The seed in effect (useful to log so an entropy-seeded run can be
    /// replayed).
    pub fn run_seed(&self) -> u64 {
        self.seed
    }

    pub fn intervals(&self) -> &IntervalSeries {
        &self.intervals
    }

    /// Evaluate every cycle length of `plan`, preserving input order.
    pub fn sweep_1d<O: SweepObserver>(
        &self,
        plan:     &Sweep1d,
        observer: &mut O,
    ) -> XingResult<Vec<EfficiencyPoint>> {
        let params = plan.points()?;
        tracing::debug!(
            points = params.len(),
            arrival_rate = plan.arrival_rate,
            threshold = plan.threshold,
            seed = self.seed,
            "starting 1-D sweep"
        );
        let threshold = plan.threshold;
        Ok(self.run_points(
            &params,
            observer,
            |p, rng| evaluate_1d(&self.simulator, p, &self.intervals, threshold, rng),
            |point: &EfficiencyPoint| point.efficiency,
        ))
    }

    /// Evaluate every (N, L) pair of `plan`, outer N, inner L.
    pub fn sweep_3d<O: SweepObserver>(
        &self,
        plan:     &Sweep3d,
        observer: &mut O,
    ) -> XingResult<Vec<SurfacePoint>> {
        let params = plan.points()?;
        tracing::debug!(
            points = params.len(),
            arrival_rates = plan.arrival_rates.len(),
            cycle_lengths = plan.cycle_lengths.len(),
            seed = self.seed,
            "starting surface sweep"
        );
        Ok(self.run_points(
            &params,
            observer,
            |p, rng| evaluate_3d(&self.simulator, p, &self.intervals, rng),
            |point: &SurfacePoint| point.efficiency,
        ))
    }

    // ── Point loop ────────────────────────────────────────────────────────

    fn run_points<T, O, F>(
        &self,
        params:        &[SimulationParameters],
        observer:      &mut O,
        eval:          F,
        efficiency_of: fn(&T) -> f64,
    ) -> Vec<T>
    where
        T: Send,
        O: SweepObserver,
        F: Fn(&SimulationParameters, &mut SimRng) -> T + Sync,
    {
        if self.intervals.is_empty() {
            tracing::warn!("interval series is empty; every point will report efficiency 0");
        }

        let total = params.len();
        let seed = self.seed;
        let started = Instant::now();
        observer.on_sweep_start(total);

        #[cfg(not(feature = "parallel"))]
        let results: Vec<T> = params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let point = eval(p, &mut SimRng::for_point(seed, i));
                observer.on_point_end(i, total, efficiency_of(&point));
                point
            })
            .collect();

        #[cfg(feature = "parallel")]
        let results: Vec<T> = {
            use rayon::prelude::*;

            // Chunks run one after another, so progress reaches the observer
            // while later chunks are still pending.
            let chunk = total.div_ceil(PROGRESS_CHUNKS).max(rayon::current_num_threads());
            let mut results: Vec<T> = Vec::with_capacity(total);
            for (c, block) in params.chunks(chunk).enumerate() {
                let offset = c * chunk;
                // Indexed collect keeps enumeration order.
                let evaluated: Vec<T> = block
                    .par_iter()
                    .enumerate()
                    .map(|(j, p)| eval(p, &mut SimRng::for_point(seed, offset + j)))
                    .collect();
                for (j, point) in evaluated.iter().enumerate() {
                    observer.on_point_end(offset + j, total, efficiency_of(point));
                }
                results.extend(evaluated);
            }
            results
        };

        let elapsed = started.elapsed();
        tracing::debug!(points = total, elapsed_ms = elapsed.as_millis() as u64, "sweep complete");
        observer.on_sweep_end(total, elapsed);
        results
    }
}
