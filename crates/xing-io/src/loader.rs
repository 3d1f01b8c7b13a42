//! CSV interval loader.
//!
//! # CSV format
//!
//! A header row followed by one observation per row.  Only the selected
//! column is read; other columns are ignored.
//!
//! ```csv
//! No,X
//! 1,0.87
//! 2,2.13
//! 3,0.41
//! ```
//!
//! Blank cells are skipped.  Any other value must parse as a positive,
//! finite number or the whole load fails with the offending line.

use std::io::Read;
use std::path::Path;

use xing_core::{IntervalSeries, XingError};

use crate::{IoError, IoResult};

/// Column read when the caller does not name one.
pub const DEFAULT_COLUMN: &str = "X";

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the interval series from `column` of the CSV file at `path`.
pub fn load_intervals_csv(path: &Path, column: &str) -> IoResult<IntervalSeries> {
    let file = std::fs::File::open(path)?;
    load_intervals_reader(file, column)
}

/// Like [`load_intervals_csv`] but accepts any `Read` source.
pub fn load_intervals_reader<R: Read>(reader: R, column: &str) -> IoResult<IntervalSeries> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let index = csv_reader
        .headers()?
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| IoError::MissingColumn(column.to_owned()))?;

    let mut values = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let cell = record.get(index).unwrap_or("");
        if cell.is_empty() {
            continue;
        }
        let value: f64 = cell.parse().map_err(|_| IoError::Parse {
            line,
            value: cell.to_owned(),
        })?;
        if !(value.is_finite() && value > 0.0) {
            return Err(IoError::NonPositive { line, value });
        }
        values.push(value);
    }

    Ok(IntervalSeries::new(values)?)
}

/// Load intervals, substituting an empty series if the source is unusable.
///
/// Every simulation over the empty series reports `(0, 0)`, so a failed load
/// degrades the results instead of aborting.  The failure is logged as a
/// warning.
pub fn load_intervals_or_empty(path: &Path, column: &str) -> IntervalSeries {
    match load_intervals_csv(path, column) {
        Ok(series) => {
            tracing::info!(
                count = series.len(),
                path = %path.display(),
                column,
                "loaded interval series"
            );
            series
        }
        Err(e) => {
            let err = XingError::DataUnavailable(format!("{}: {e}", path.display()));
            tracing::warn!(error = %err, "continuing with an empty interval series");
            IntervalSeries::empty()
        }
    }
}
