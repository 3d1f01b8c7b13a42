//! Unit tests for xing-sim.

#[cfg(test)]
mod fixtures {
    use xing_core::SimRng;

    use crate::ArrivalModel;

    /// Deterministic arrivals: the same count every interval.
    pub struct FixedArrivals(pub u64);

    impl ArrivalModel for FixedArrivals {
        fn draw_arrivals(&self, _rate: f64, _interval: f64, _rng: &mut SimRng) -> u64 {
            self.0
        }
    }
}

#[cfg(test)]
mod capacity {
    use crate::capacity_for;

    #[test]
    fn below_one_cycle_serves_nothing() {
        assert_eq!(capacity_for(0.5, 1.0, 5), 0);
        assert_eq!(capacity_for(0.999, 1.0, 5), 0);
    }

    #[test]
    fn tier_boundaries_are_inclusive_below() {
        // Exact binary values so L, 2L and 3L are representable.
        assert_eq!(capacity_for(0.25, 0.25, 4), 4);  // t = L
        assert_eq!(capacity_for(0.5, 0.25, 4), 8);   // t = 2L
        assert_eq!(capacity_for(0.75, 0.25, 4), 12); // t = 3L → ⌊3⌋·k
    }

    #[test]
    fn inside_tiers() {
        assert_eq!(capacity_for(1.5, 1.0, 3), 3);
        assert_eq!(capacity_for(2.5, 1.0, 3), 6);
        assert_eq!(capacity_for(7.9, 1.0, 3), 21);
    }

    #[test]
    fn large_intervals_scale_with_cycle_count() {
        assert_eq!(capacity_for(100.0, 0.5, 2), 400);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(capacity_for(1e30, 1.0, u64::MAX), u64::MAX);
        assert_eq!(capacity_for(2.0, 1.0, u64::MAX), u64::MAX);
    }
}

#[cfg(test)]
mod arrivals {
    use xing_core::SimRng;

    use crate::{ArrivalModel, PoissonArrivals};

    #[test]
    fn zero_mean_draws_zero() {
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            assert_eq!(PoissonArrivals.draw_arrivals(0.0, 3.0, &mut rng), 0);
            assert_eq!(PoissonArrivals.draw_arrivals(5.0, 0.0, &mut rng), 0);
        }
    }

    #[test]
    fn tiny_mean_is_mostly_zero() {
        let mut rng = SimRng::new(2);
        let nonzero = (0..10_000)
            .filter(|_| PoissonArrivals.draw_arrivals(1e-6, 1.0, &mut rng) > 0)
            .count();
        assert!(nonzero < 10, "got {nonzero}");
    }

    #[test]
    fn sample_mean_matches_rate_times_interval() {
        let mut rng = SimRng::new(3);
        let n = 20_000;
        let total: u64 = (0..n)
            .map(|_| PoissonArrivals.draw_arrivals(4.0, 2.5, &mut rng))
            .sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 10.0).abs() < 0.2, "got {mean}");
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = SimRng::new(11);
        let mut b = SimRng::new(11);
        for _ in 0..50 {
            assert_eq!(
                PoissonArrivals.draw_arrivals(3.0, 1.0, &mut a),
                PoissonArrivals.draw_arrivals(3.0, 1.0, &mut b),
            );
        }
    }
}

#[cfg(test)]
mod simulator {
    use xing_core::{IntervalSeries, SimRng, SimulationParameters};

    use super::fixtures::FixedArrivals;
    use crate::{CrossingSimulator, PoissonArrivals, ReplicationTotals, SimulationOutcome};

    fn series(values: &[f64]) -> IntervalSeries {
        IntervalSeries::new(values.to_vec()).unwrap()
    }

    #[test]
    fn hand_traced_replication() {
        // Three arrivals per interval, L = 1, k = 2.
        //   t=0.5  q=3  cap 0  served 0  q=3
        //   t=1.0  q=6  cap 2  served 2  q=4
        //   t=1.5  q=7  cap 2  served 2  q=5
        //   t=2.0  q=8  cap 4  served 4  q=4
        //   t=3.0  q=7  cap 6  served 6  q=1
        let sim = CrossingSimulator::new(FixedArrivals(3));
        let params = SimulationParameters::new(1.0, 1.0, 2, 1).unwrap();
        let totals = sim.run_replication(
            &params,
            &series(&[0.5, 1.0, 1.5, 2.0, 3.0]),
            &mut SimRng::new(0),
        );
        assert_eq!(totals, ReplicationTotals { crossed: 14, queued: 15 });
    }

    #[test]
    fn service_never_exceeds_queue() {
        // Capacity far above arrivals: everything is served, nothing more.
        let sim = CrossingSimulator::new(FixedArrivals(1));
        let params = SimulationParameters::new(1.0, 0.1, 1_000, 1).unwrap();
        let totals = sim.run_replication(&params, &series(&[1.0, 1.0, 1.0]), &mut SimRng::new(0));
        assert_eq!(totals, ReplicationTotals { crossed: 3, queued: 3 });
    }

    #[test]
    fn replications_average_fixed_totals() {
        let sim = CrossingSimulator::new(FixedArrivals(3));
        let params = SimulationParameters::new(1.0, 1.0, 2, 7).unwrap();
        let out = sim.simulate(&params, &series(&[0.5, 1.0, 1.5, 2.0, 3.0]), &mut SimRng::new(0));
        assert_eq!(out, SimulationOutcome { mean_crossed: 14.0, mean_queued: 15.0 });
        assert!((out.efficiency() - 14.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn saturating_arrivals_do_not_overflow() {
        let sim = CrossingSimulator::new(FixedArrivals(u64::MAX));
        let params = SimulationParameters::new(1.0, 0.1, 5, 2).unwrap();
        let totals = sim.run_replication(&params, &series(&[1.0, 1.0, 1.0]), &mut SimRng::new(0));
        assert_eq!(totals.queued, u64::MAX);
        assert!(totals.crossed <= totals.queued);

        let out = sim.simulate(&params, &series(&[1.0, 1.0, 1.0]), &mut SimRng::new(0));
        assert!(out.efficiency().is_finite());
        assert!(out.mean_crossed <= out.mean_queued);
    }

    #[test]
    fn huge_poisson_rate_stays_within_totals() {
        let sim = CrossingSimulator::new(PoissonArrivals);
        let params = SimulationParameters::new(1e20, 1.0, 5, 1).unwrap();
        let out = sim.simulate(&params, &series(&[1.0, 1.0]), &mut SimRng::new(7));
        assert!(out.mean_queued > 0.0);
        assert!(out.mean_crossed <= out.mean_queued);
        let e = out.efficiency();
        assert!((0.0..=1.0).contains(&e));
    }

    #[test]
    fn empty_series_is_zero() {
        let sim = CrossingSimulator::new(PoissonArrivals);
        let params = SimulationParameters::new(5.0, 0.01, 5, 100).unwrap();
        let out = sim.simulate(&params, &IntervalSeries::empty(), &mut SimRng::new(1));
        assert_eq!(out, SimulationOutcome::default());
        assert_eq!(out.efficiency(), 0.0);
    }

    #[test]
    fn zero_rate_is_zero_regardless_of_service() {
        let sim = CrossingSimulator::new(PoissonArrivals);
        let intervals = series(&[0.005, 0.02, 0.05, 1.0, 10.0]);
        for (l, k) in [(0.001, 1), (0.01, 5), (1.0, 100), (50.0, 3)] {
            let params = SimulationParameters::new(0.0, l, k, 25).unwrap();
            let out = sim.simulate(&params, &intervals, &mut SimRng::new(9));
            assert_eq!(out.mean_crossed, 0.0);
            assert_eq!(out.mean_queued, 0.0);
            assert_eq!(out.efficiency(), 0.0);
        }
    }

    #[test]
    fn ample_capacity_drains_every_interval() {
        let sim = CrossingSimulator::new(PoissonArrivals);
        let params = SimulationParameters::new(10.0, 0.01, 1_000_000, 1).unwrap();
        let intervals = series(&[1.0, 2.0, 3.0, 0.5]);
        for seed in 0..20 {
            let totals = sim.run_replication(&params, &intervals, &mut SimRng::new(seed));
            assert_eq!(totals.crossed, totals.queued);
        }
    }

    #[test]
    fn crossed_never_exceeds_queued() {
        let sim = CrossingSimulator::new(PoissonArrivals);
        let params = SimulationParameters::new(5.0, 0.01, 5, 1000).unwrap();
        let intervals = series(&[0.005, 0.02, 0.05]);
        let mut rng = SimRng::new(2024);
        for _ in 0..10 {
            let out = sim.simulate(&params, &intervals, &mut rng);
            assert!(out.mean_crossed <= out.mean_queued);
            assert!(out.efficiency() >= 0.0 && out.efficiency() <= 1.0);
        }
    }

    #[test]
    fn estimate_variance_shrinks_with_replications() {
        let sim = CrossingSimulator::new(PoissonArrivals);
        let intervals = series(&[0.005, 0.02, 0.05]);

        let spread = |replications: u32| {
            let params = SimulationParameters::new(5.0, 0.01, 5, replications).unwrap();
            let estimates: Vec<f64> = (0..40)
                .map(|seed| sim.simulate(&params, &intervals, &mut SimRng::new(seed)).mean_queued)
                .collect();
            let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
            estimates.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / estimates.len() as f64
        };

        let few = spread(10);
        let many = spread(1000);
        assert!(many < few, "variance {many} with 1000 reps vs {few} with 10");
    }

    #[test]
    fn same_seed_same_outcome() {
        let sim = CrossingSimulator::new(PoissonArrivals);
        let params = SimulationParameters::new(5.0, 0.02, 3, 50).unwrap();
        let intervals = series(&[0.1, 0.03, 0.07, 0.2]);
        let a = sim.simulate(&params, &intervals, &mut SimRng::new(77));
        let b = sim.simulate(&params, &intervals, &mut SimRng::new(77));
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;
    use xing_core::{IntervalSeries, SimRng, SimulationParameters};

    use crate::{CrossingSimulator, PoissonArrivals, capacity_for};

    proptest! {
        #[test]
        fn replication_conserves_units(
            intervals in prop::collection::vec(0.001f64..5.0, 0..40),
            rate in 0.0f64..20.0,
            cycle in 0.001f64..2.0,
            k in 1u64..20,
            seed in any::<u64>(),
        ) {
            let sim = CrossingSimulator::new(PoissonArrivals);
            let params = SimulationParameters::new(rate, cycle, k, 1).unwrap();
            let series = IntervalSeries::new(intervals.clone()).unwrap();
            let totals = sim.run_replication(&params, &series, &mut SimRng::new(seed));

            prop_assert!(totals.crossed <= totals.queued);
            let max_service: u64 = intervals.iter().map(|&t| capacity_for(t, cycle, k)).sum();
            prop_assert!(totals.crossed <= max_service);
        }

        #[test]
        fn capacity_is_monotone_in_interval(
            a in 0.0f64..50.0,
            b in 0.0f64..50.0,
            cycle in 0.01f64..5.0,
            k in 1u64..10,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(capacity_for(lo, cycle, k) <= capacity_for(hi, cycle, k));
        }
    }
}
