//! The `CrossingSimulator` and its replication loop.

use xing_core::{IntervalSeries, SimRng, SimulationParameters};

use crate::{ArrivalModel, PoissonArrivals, capacity_for};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Totals for a single replication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplicationTotals {
    /// Units served over the whole interval series.
    pub crossed: u64,
    /// Units that arrived over the whole interval series.
    pub queued:  u64,
}

/// Replication-averaged totals.
///
/// `mean_queued == 0` implies `mean_crossed == 0`: with no arrivals there is
/// nothing to serve.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationOutcome {
    pub mean_crossed: f64,
    pub mean_queued:  f64,
}

impl SimulationOutcome {
    /// `mean_crossed / mean_queued`, or exactly `0.0` when nothing arrived.
    ///
    /// The ratio is taken over the aggregate totals of whole runs, never per
    /// interval.
    #[inline]
    pub fn efficiency(&self) -> f64 {
        if self.mean_queued > 0.0 {
            self.mean_crossed / self.mean_queued
        } else {
            0.0
        }
    }
}

// ── CrossingSimulator ─────────────────────────────────────────────────────────

/// Runs the queue/serve process over an interval series.
///
/// Generic over the [`ArrivalModel`] so tests can inject deterministic
/// arrivals; production code uses the default [`PoissonArrivals`].
#[derive(Clone, Debug, Default)]
pub struct CrossingSimulator<A: ArrivalModel = PoissonArrivals> {
    arrivals: A,
}

impl<A: ArrivalModel> CrossingSimulator<A> {
    pub fn new(arrivals: A) -> Self {
        Self { arrivals }
    }

    /// Run one replication from an empty queue.
    pub fn run_replication(
        &self,
        params:    &SimulationParameters,
        intervals: &IntervalSeries,
        rng:       &mut SimRng,
    ) -> ReplicationTotals {
        let rate = params.arrival_rate();
        let cycle_length = params.cycle_length();
        let capacity = params.capacity();

        let mut queue: u64 = 0;
        let mut totals = ReplicationTotals::default();

        for &t in intervals.iter() {
            let new = self.arrivals.draw_arrivals(rate, t, rng);
            // Counts saturate at u64::MAX for extreme arrival rates.
            queue = queue.saturating_add(new);
            totals.queued = totals.queued.saturating_add(new);

            let served = queue.min(capacity_for(t, cycle_length, capacity));
            queue -= served;
            totals.crossed = totals.crossed.saturating_add(served).min(totals.queued);
        }

        debug_assert!(totals.crossed <= totals.queued);
        totals
    }

    /// Mean crossed / queued totals over `params.replications()` independent
    /// replications.
    ///
    /// Replications draw from `rng` in sequence, so they share the interval
    /// series but not their random outcomes.  An empty series yields `(0, 0)`.
    pub fn simulate(
        &self,
        params:    &SimulationParameters,
        intervals: &IntervalSeries,
        rng:       &mut SimRng,
    ) -> SimulationOutcome {
        if intervals.is_empty() {
            return SimulationOutcome::default();
        }

        let replications = params.replications();
        let (mut crossed, mut queued) = (0u128, 0u128);
        for _ in 0..replications {
            let totals = self.run_replication(params, intervals, rng);
            crossed += totals.crossed as u128;
            queued += totals.queued as u128;
        }

        let n = replications as f64;
        SimulationOutcome {
            mean_crossed: crossed as f64 / n,
            mean_queued:  queued as f64 / n,
        }
    }
}
