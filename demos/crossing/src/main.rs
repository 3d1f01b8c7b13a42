//! crossing — command-line front end for the crossing efficiency simulator.
//!
//! Loads the observed interval series once, runs either a Max-L sweep or a
//! surface sweep, prints the result tables, and optionally writes CSVs.

mod cli;
mod settings;

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xing_core::IntervalSeries;
use xing_io::{CsvWriter, ResultWriter, load_intervals_or_empty};
use xing_sweep::{
    EfficiencyGrid, EfficiencyPoint, MaxLConfig, Partition, SurfaceConfig, SurfacePoint,
    SweepObserver, SweepRunner,
};

use cli::{Cli, Commands, Common};
use settings::{MaxLOverrides, SurfaceOverrides};

// ── Progress reporting ────────────────────────────────────────────────────────

/// Logs progress every tenth of the sweep.
struct ProgressLogger {
    label: &'static str,
    step:  usize,
}

impl ProgressLogger {
    fn new(label: &'static str) -> Self {
        Self { label, step: 1 }
    }
}

impl SweepObserver for ProgressLogger {
    fn on_sweep_start(&mut self, total: usize) {
        self.step = total.div_ceil(10).max(1);
        tracing::info!(points = total, "{} sweep started", self.label);
    }

    fn on_point_end(&mut self, index: usize, total: usize, _efficiency: f64) {
        let done = index + 1;
        if done % self.step == 0 || done == total {
            tracing::info!("{}: {done}/{total} points", self.label);
        }
    }

    fn on_sweep_end(&mut self, points: usize, elapsed: Duration) {
        tracing::debug!(points, elapsed_ms = elapsed.as_millis() as u64, "{} sweep finished", self.label);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::MaxL { common, rate, capacity, l_start, l_end, l_step, threshold, replications } => {
            let mut cfg: MaxLConfig = settings::load(common.config.as_deref())?;
            MaxLOverrides {
                rate,
                capacity,
                l_range: (l_start, l_end, l_step),
                threshold,
                replications,
            }
            .apply(&mut cfg);
            run_max_l(&common, &cfg)
        }
        Commands::Surface {
            common, capacity, l_start, l_end, l_step, n_start, n_end, n_step, replications,
        } => {
            let mut cfg: SurfaceConfig = settings::load(common.config.as_deref())?;
            SurfaceOverrides {
                capacity,
                l_range: (l_start, l_end, l_step),
                n_range: (n_start, n_end, n_step),
                replications,
            }
            .apply(&mut cfg);
            run_surface(&common, &cfg)
        }
    }
}

fn runner_for(common: &Common) -> SweepRunner {
    let intervals: IntervalSeries = load_intervals_or_empty(&common.intervals, &common.column);
    let runner = SweepRunner::new(intervals);
    let runner = match common.seed {
        Some(seed) => runner.seed(seed),
        None => runner,
    };
    tracing::info!(seed = runner.run_seed(), "run seed");
    runner
}

fn output_dir(common: &Common) -> Result<Option<&Path>> {
    match common.out.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(Some(dir))
        }
        None => Ok(None),
    }
}

// ── Max L ─────────────────────────────────────────────────────────────────────

fn run_max_l(common: &Common, cfg: &MaxLConfig) -> Result<()> {
    let plan = cfg.to_plan()?;
    let runner = runner_for(common);

    println!("=== crossing — Max L ===");
    println!(
        "N: {}  |  k: {}  |  L: {}..={} step {}  |  threshold: {}  |  replications: {}",
        cfg.arrival_rate,
        cfg.capacity,
        cfg.cycle_length.start,
        cfg.cycle_length.end,
        cfg.cycle_length.step,
        cfg.threshold,
        cfg.replications,
    );
    println!("Intervals: {}", runner.intervals().len());
    println!();

    let t0 = Instant::now();
    let points = runner.sweep_1d(&plan, &mut ProgressLogger::new("max-l"))?;
    let elapsed = t0.elapsed();

    let partition = Partition::of(&points);
    print_curve_table("Max L", partition.operating_point().into_iter());
    print_curve_table("Optimal", partition.optimal.iter());
    print_curve_table("Alternative", partition.alternative.iter());
    println!("Max L time: {:.2} s", elapsed.as_secs_f64());

    if let Some(dir) = output_dir(common)? {
        let mut writer = CsvWriter::new(dir);
        writer.write_curve(&points)?;
        writer.finish()?;
        println!("Wrote {}", writer.dir().join(xing_io::csv::CURVE_FILE).display());
    }
    Ok(())
}

fn print_curve_table<'a>(title: &str, rows: impl Iterator<Item = &'a EfficiencyPoint>) {
    println!("{title}");
    println!("{:<12} {:<12}", "L", "Efficiency");
    println!("{}", "-".repeat(25));
    let mut any = false;
    for p in rows {
        println!("{:<12.4} {:<12.4}", p.cycle_length, p.efficiency);
        any = true;
    }
    if !any {
        println!("(none)");
    }
    println!();
}

// ── Surface ───────────────────────────────────────────────────────────────────

fn run_surface(common: &Common, cfg: &SurfaceConfig) -> Result<()> {
    let plan = cfg.to_plan()?;
    let runner = runner_for(common);

    println!("=== crossing — efficiency surface ===");
    println!(
        "k: {}  |  L: {}..={} step {}  |  N: {}..={} step {}  |  replications: {}",
        cfg.capacity,
        cfg.cycle_length.start,
        cfg.cycle_length.end,
        cfg.cycle_length.step,
        cfg.arrival_rate.start,
        cfg.arrival_rate.end,
        cfg.arrival_rate.step,
        cfg.replications,
    );
    println!("Intervals: {}  |  points: {}", runner.intervals().len(), plan.len());
    println!();

    let t0 = Instant::now();
    let points = runner.sweep_3d(&plan, &mut ProgressLogger::new("surface"))?;
    let elapsed = t0.elapsed();

    let grid = EfficiencyGrid::from_points(&points);
    print_surface_summary(&grid, &points);
    println!("Surface time: {:.2} s", elapsed.as_secs_f64());

    if let Some(dir) = output_dir(common)? {
        let mut writer = CsvWriter::new(dir);
        writer.write_surface(&points)?;
        writer.write_grid(&grid)?;
        writer.finish()?;
        println!("Wrote surface and grid CSVs to {}", writer.dir().display());
    }
    Ok(())
}

/// Per-N row summary: efficiency range and the L closest to efficiency 1.
fn print_surface_summary(grid: &EfficiencyGrid, points: &[SurfacePoint]) {
    println!(
        "Grid: {} N rows × {} L columns ({} filled by default)",
        grid.arrival_rates().len(),
        grid.cycle_lengths().len(),
        grid.missing_cells(),
    );
    println!("{:<8} {:<10} {:<10} {:<12}", "N", "min eff", "max eff", "L @ eff≈1");
    println!("{}", "-".repeat(43));
    for (n, row) in grid.rows() {
        let min = row.iter().copied().fold(f64::INFINITY, f64::min);
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let closest = points
            .iter()
            .filter(|p| p.arrival_rate == n)
            .min_by(|a, b| (a.efficiency - 1.0).abs().total_cmp(&(b.efficiency - 1.0).abs()));
        println!(
            "{:<8} {:<10.4} {:<10.4} {:<12}",
            n,
            min,
            max,
            closest.map_or_else(|| "-".to_owned(), |p| format!("{:.4}", p.cycle_length)),
        );
    }
    println!();
}
