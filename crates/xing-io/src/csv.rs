//! CSV output backend.
//!
//! Files are created in the output directory on first write, so a 1-D run
//! leaves only `efficiency_curve.csv` behind:
//! - `efficiency_curve.csv`   — `L,Efficiency,Optimal`
//! - `efficiency_surface.csv` — `L,N,Efficiency`
//! - `efficiency_grid.csv`    — `N` then one column per L value

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use xing_sweep::{EfficiencyGrid, EfficiencyPoint, SurfacePoint};

use crate::IoResult;
use crate::writer::ResultWriter;

pub const CURVE_FILE:   &str = "efficiency_curve.csv";
pub const SURFACE_FILE: &str = "efficiency_surface.csv";
pub const GRID_FILE:    &str = "efficiency_grid.csv";

/// Writes sweep results to CSV files in one directory.
pub struct CsvWriter {
    dir:     PathBuf,
    curve:   Option<Writer<File>>,
    surface: Option<Writer<File>>,
    grid:    Option<Writer<File>>,
}

impl CsvWriter {
    /// Target `dir`; it must exist.  No file is created until written.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir:     dir.to_path_buf(),
            curve:   None,
            surface: None,
            grid:    None,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn open<'a, H: AsRef<[u8]>>(
    slot:   &'a mut Option<Writer<File>>,
    path:   PathBuf,
    header: &[H],
) -> IoResult<&'a mut Writer<File>> {
    let w = match slot.take() {
        Some(w) => w,
        None => {
            let mut w = Writer::from_path(path)?;
            w.write_record(header)?;
            w
        }
    };
    Ok(slot.insert(w))
}

impl ResultWriter for CsvWriter {
    fn write_curve(&mut self, points: &[EfficiencyPoint]) -> IoResult<()> {
        let w = open(&mut self.curve, self.dir.join(CURVE_FILE), &["L", "Efficiency", "Optimal"])?;
        for p in points {
            w.write_record(&[
                p.cycle_length.to_string(),
                p.efficiency.to_string(),
                p.is_optimal.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_surface(&mut self, points: &[SurfacePoint]) -> IoResult<()> {
        let w = open(&mut self.surface, self.dir.join(SURFACE_FILE), &["L", "N", "Efficiency"])?;
        for p in points {
            w.write_record(&[
                p.cycle_length.to_string(),
                p.arrival_rate.to_string(),
                p.efficiency.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_grid(&mut self, grid: &EfficiencyGrid) -> IoResult<()> {
        let header: Vec<String> = std::iter::once("N".to_owned())
            .chain(grid.cycle_lengths().iter().map(f64::to_string))
            .collect();
        let w = open(&mut self.grid, self.dir.join(GRID_FILE), &header)?;
        for (n, row) in grid.rows() {
            let record: Vec<String> = std::iter::once(n.to_string())
                .chain(row.iter().map(f64::to_string))
                .collect();
            w.write_record(&record)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> IoResult<()> {
        for w in [&mut self.curve, &mut self.surface, &mut self.grid].into_iter().flatten() {
            w.flush()?;
        }
        Ok(())
    }
}
