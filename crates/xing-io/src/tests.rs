//! Tests for xing-io.

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use crate::{IoError, DEFAULT_COLUMN, load_intervals_or_empty, load_intervals_reader};

    #[test]
    fn reads_named_column() {
        let data = "No,X,Note\n1,0.87,a\n2,2.13,b\n3,0.41,c\n";
        let s = load_intervals_reader(Cursor::new(data), DEFAULT_COLUMN).unwrap();
        assert_eq!(s.as_slice(), &[0.87, 2.13, 0.41]);
    }

    #[test]
    fn other_column_and_whitespace() {
        let data = "gap , X\n 1.5 , 9\n0.25,9\n";
        let s = load_intervals_reader(Cursor::new(data), "gap").unwrap();
        assert_eq!(s.as_slice(), &[1.5, 0.25]);
    }

    #[test]
    fn blank_cells_are_skipped() {
        let data = "X\n1.0\n\n2.0\n,\n";
        let s = load_intervals_reader(Cursor::new(data), "X").unwrap();
        assert_eq!(s.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn header_only_is_empty_series() {
        let s = load_intervals_reader(Cursor::new("X\n"), "X").unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn missing_column() {
        let err = load_intervals_reader(Cursor::new("Y\n1.0\n"), "X").unwrap_err();
        assert!(matches!(err, IoError::MissingColumn(ref c) if c == "X"));
    }

    #[test]
    fn parse_error_reports_line() {
        let err = load_intervals_reader(Cursor::new("X\n1.0\nabc\n"), "X").unwrap_err();
        match err {
            IoError::Parse { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_rejected() {
        for bad in ["0", "-0.5", "NaN", "inf"] {
            let data = format!("X\n1.0\n{bad}\n");
            let err = load_intervals_reader(Cursor::new(data), "X").unwrap_err();
            assert!(matches!(err, IoError::NonPositive { line: 3, .. }), "{bad}: {err:?}");
        }
    }

    #[test]
    fn unavailable_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let s = load_intervals_or_empty(&dir.path().join("missing.csv"), "X");
        assert!(s.is_empty());
    }

    #[test]
    fn bad_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "X\n1.0\n-3\n").unwrap();
        assert!(load_intervals_or_empty(&path, "X").is_empty());
    }

    #[test]
    fn good_file_loads() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("intervals.csv");
        std::fs::write(&path, "X\n0.5\n1.5\n").unwrap();
        assert_eq!(load_intervals_or_empty(&path, "X").as_slice(), &[0.5, 1.5]);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;
    use xing_sweep::{EfficiencyGrid, EfficiencyPoint, SurfacePoint};

    use crate::csv::{CURVE_FILE, CsvWriter, GRID_FILE, SURFACE_FILE};
    use crate::writer::ResultWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read(dir: &TempDir, file: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        (headers, rows)
    }

    fn surface() -> Vec<SurfacePoint> {
        vec![
            SurfacePoint { cycle_length: 0.5, arrival_rate: 1.0, efficiency: 0.25 },
            SurfacePoint { cycle_length: 1.0, arrival_rate: 1.0, efficiency: 0.5 },
            SurfacePoint { cycle_length: 0.5, arrival_rate: 2.0, efficiency: 0.75 },
        ]
    }

    #[test]
    fn files_created_lazily() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path());
        assert!(!dir.path().join(CURVE_FILE).exists());

        w.write_curve(&[]).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join(CURVE_FILE).exists());
        assert!(!dir.path().join(SURFACE_FILE).exists());
        assert!(!dir.path().join(GRID_FILE).exists());
    }

    #[test]
    fn curve_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path());
        w.write_curve(&[
            EfficiencyPoint { cycle_length: 0.25, efficiency: 1.0, is_optimal: true },
            EfficiencyPoint { cycle_length: 0.5, efficiency: 0.5, is_optimal: false },
        ])
        .unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, CURVE_FILE);
        assert_eq!(headers, ["L", "Efficiency", "Optimal"]);
        assert_eq!(rows, [["0.25", "1", "true"], ["0.5", "0.5", "false"]]);
    }

    #[test]
    fn repeated_writes_append_under_one_header() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path());
        let p = EfficiencyPoint { cycle_length: 0.25, efficiency: 1.0, is_optimal: true };
        w.write_curve(&[p]).unwrap();
        w.write_curve(&[p]).unwrap();
        w.finish().unwrap();
        assert_eq!(read(&dir, CURVE_FILE).1.len(), 2);
    }

    #[test]
    fn surface_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path());
        w.write_surface(&surface()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, SURFACE_FILE);
        assert_eq!(headers, ["L", "N", "Efficiency"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], ["0.5", "2", "0.75"]);
    }

    #[test]
    fn grid_fills_missing_cells_with_zero() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path());
        w.write_grid(&EfficiencyGrid::from_points(&surface())).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read(&dir, GRID_FILE);
        assert_eq!(headers, ["N", "0.5", "1"]);
        assert_eq!(rows, [["1", "0.25", "0.5"], ["2", "0.75", "0"]]);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path());
        w.finish().unwrap();
        w.write_surface(&surface()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
