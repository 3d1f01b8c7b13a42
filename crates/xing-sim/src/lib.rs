//! `xing-sim` — the stochastic crossing process.
//!
//! # One replication
//!
//! ```text
//! queue = 0
//! for t in intervals:
//!   ① Arrive  — draw Poisson(N·t) new units; add to queue and to queued total.
//!   ② Capacity — capacity_for(t, L, k): 0, k, 2k, or ⌊t/L⌋·k.
//!   ③ Serve   — min(queue, capacity) units cross and leave the queue.
//! ```
//!
//! [`CrossingSimulator::simulate`] repeats this `replications` times with a
//! fresh queue each time and reports the mean totals.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use xing_core::{IntervalSeries, SimRng, SimulationParameters};
//! use xing_sim::CrossingSimulator;
//!
//! let params = SimulationParameters::new(5.0, 0.01, 5, 20)?;
//! let outcome = CrossingSimulator::default().simulate(&params, &intervals, &mut SimRng::new(42));
//! println!("efficiency = {}", outcome.efficiency());
//! ```

pub mod arrival;
pub mod capacity;
pub mod simulator;

#[cfg(test)]
mod tests;

pub use arrival::{ArrivalModel, PoissonArrivals};
pub use capacity::capacity_for;
pub use simulator::{CrossingSimulator, ReplicationTotals, SimulationOutcome};
