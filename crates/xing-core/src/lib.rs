//! `xing-core` — foundational types for the crossing efficiency simulator.
//!
//! This crate is a dependency of every other `xing-*` crate.  It has no
//! `xing-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`intervals`]   | `IntervalSeries` — the shared, read-only input data   |
//! | [`params`]      | `SimulationParameters` (N, L, k, replications)        |
//! | [`range`]       | `LinearRange` — inclusive sweep-axis generator        |
//! | [`rng`]         | `SimRng` (one per evaluation, never global)           |
//! | [`error`]       | `XingError`, `XingResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `LinearRange` and        |
//!           | `SimulationParameters`.                                    |

pub mod error;
pub mod intervals;
pub mod params;
pub mod range;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{XingError, XingResult};
pub use intervals::IntervalSeries;
pub use params::SimulationParameters;
pub use range::{LinearRange, MAX_RANGE_LEN};
pub use rng::SimRng;
