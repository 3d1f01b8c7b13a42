//! Layered sweep settings: defaults ← JSON file ← command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use xing_core::LinearRange;
use xing_sweep::{MaxLConfig, SurfaceConfig};

/// Read a config file, or fall back to `T::default()`.
pub fn load<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Replace range bounds that were given on the command line.
pub fn override_range(range: &mut LinearRange, start: Option<f64>, end: Option<f64>, step: Option<f64>) {
    if let Some(v) = start {
        range.start = v;
    }
    if let Some(v) = end {
        range.end = v;
    }
    if let Some(v) = step {
        range.step = v;
    }
}

pub struct MaxLOverrides {
    pub rate:         Option<f64>,
    pub capacity:     Option<u64>,
    pub l_range:      (Option<f64>, Option<f64>, Option<f64>),
    pub threshold:    Option<f64>,
    pub replications: Option<u32>,
}

impl MaxLOverrides {
    pub fn apply(self, cfg: &mut MaxLConfig) {
        if let Some(v) = self.rate {
            cfg.arrival_rate = v;
        }
        if let Some(v) = self.capacity {
            cfg.capacity = v;
        }
        let (start, end, step) = self.l_range;
        override_range(&mut cfg.cycle_length, start, end, step);
        if let Some(v) = self.threshold {
            cfg.threshold = v;
        }
        if let Some(v) = self.replications {
            cfg.replications = v;
        }
    }
}

pub struct SurfaceOverrides {
    pub capacity:     Option<u64>,
    pub l_range:      (Option<f64>, Option<f64>, Option<f64>),
    pub n_range:      (Option<f64>, Option<f64>, Option<f64>),
    pub replications: Option<u32>,
}

impl SurfaceOverrides {
    pub fn apply(self, cfg: &mut SurfaceConfig) {
        if let Some(v) = self.capacity {
            cfg.capacity = v;
        }
        let (start, end, step) = self.l_range;
        override_range(&mut cfg.cycle_length, start, end, step);
        let (start, end, step) = self.n_range;
        override_range(&mut cfg.arrival_rate, start, end, step);
        if let Some(v) = self.replications {
            cfg.replications = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn no_file_means_defaults() {
        let cfg: MaxLConfig = load(None).unwrap();
        assert_eq!(cfg, MaxLConfig::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "threshold": 0.1, "cycle_length": {{ "start": 0.5, "end": 2.0, "step": 0.5 }} }}"#)
            .unwrap();
        let cfg: MaxLConfig = load(Some(file.path())).unwrap();
        assert_eq!(cfg.threshold, 0.1);
        assert_eq!(cfg.cycle_length, LinearRange::new(0.5, 2.0, 0.5));
        assert_eq!(cfg.arrival_rate, MaxLConfig::default().arrival_rate);
    }

    #[test]
    fn flags_override_file_values() {
        let mut cfg = SurfaceConfig::default();
        SurfaceOverrides {
            capacity:     Some(9),
            l_range:      (None, Some(2.0), None),
            n_range:      (Some(0.5), None, Some(0.5)),
            replications: None,
        }
        .apply(&mut cfg);
        assert_eq!(cfg.capacity, 9);
        assert_eq!(cfg.cycle_length, LinearRange::new(0.01, 2.0, 0.01));
        assert_eq!(cfg.arrival_rate, LinearRange::new(0.5, 10.0, 0.5));
        assert_eq!(cfg.replications, 20);
    }
}
