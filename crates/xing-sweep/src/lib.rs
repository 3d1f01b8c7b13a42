//! `xing-sweep` — efficiency evaluation and parameter sweeps.
//!
//! # Data flow
//!
//! ```text
//! Sweep1d / Sweep3d plan
//!   └─ SweepRunner::sweep_1d / sweep_3d        (one point per parameter set)
//!        └─ evaluate_1d / evaluate_3d          (efficiency + classification)
//!             └─ CrossingSimulator::simulate   (replicated Monte Carlo run)
//! ```
//!
//! Results come back as an ordered `Vec` in enumeration order.  The
//! presentation helpers [`Partition`] (1-D) and [`EfficiencyGrid`] (2-D)
//! turn them into what a table or plot needs.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates sweep points on Rayon's thread pool.         |
//! | `serde`    | Serde derives on configs and result points.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use xing_sweep::{MaxLConfig, NoopObserver, Partition, SweepRunner};
//!
//! let plan = MaxLConfig::default().to_plan()?;
//! let runner = SweepRunner::new(intervals).seed(42);
//! let points = runner.sweep_1d(&plan, &mut NoopObserver)?;
//! if let Some(best) = Partition::of(&points).operating_point() {
//!     println!("max L = {}", best.cycle_length);
//! }
//! ```

pub mod config;
pub mod evaluate;
pub mod grid;
pub mod observer;
pub mod partition;
pub mod plan;
pub mod runner;


pub use config::{MaxLConfig, SurfaceConfig};
pub use evaluate::{EfficiencyPoint, SurfacePoint, evaluate_1d, evaluate_3d, is_optimal};
pub use grid::{DEFAULT_EFFICIENCY, EfficiencyGrid};
pub use observer::{NoopObserver, SweepObserver};
pub use partition::Partition;
pub use plan::{Sweep1d, Sweep3d};
pub use runner::SweepRunner;
