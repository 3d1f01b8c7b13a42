//! `xing-io` — the simulator's file boundary.
//!
//! | Direction | Module     | What                                                  |
//! |-----------|------------|-------------------------------------------------------|
//! | in        | [`loader`] | Interval series from one column of a CSV file         |
//! | out       | [`csv`]    | `efficiency_curve.csv`, `efficiency_surface.csv`,     |
//! |           |            | `efficiency_grid.csv`                                 |
//!
//! Writers implement [`ResultWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use xing_io::{CsvWriter, ResultWriter, load_intervals_or_empty};
//!
//! let intervals = load_intervals_or_empty(Path::new("data/intervals.csv"), "X");
//! let points = runner.sweep_1d(&plan, &mut NoopObserver)?;
//! let mut out = CsvWriter::new(Path::new("./output"));
//! out.write_curve(&points)?;
//! out.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod loader;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{IoError, IoResult};
pub use loader::{DEFAULT_COLUMN, load_intervals_csv, load_intervals_or_empty, load_intervals_reader};
pub use writer::ResultWriter;
