//! Subject ids and the per-subject experiment clock.

use std::collections::HashMap;
use std::path::Path;

use polars::prelude::*;

use super::utility::read_int_column;
use crate::common::{HarResult, WINDOW_SPACING};

/// Elapsed time at the start of every window.
///
/// Each subject's clock starts at its lowest window index and advances by
/// `WINDOW_SPACING` per window index, gaps included.
pub fn elapsed_times(subject_ids: &[i64]) -> Vec<f64> {
    let mut first_window: HashMap<i64, usize> = HashMap::new();
    for (window, subject) in subject_ids.iter().enumerate() {
        first_window.entry(*subject).or_insert(window);
    }

    subject_ids
        .iter()
        .enumerate()
        .map(|(window, subject)| WINDOW_SPACING * (window - first_window[subject]) as f64)
        .collect()
}

/// Table `(window_index, subject_id, elapsed_time)` for a list of subject ids.
pub fn subject_frame(subject_ids: &[i64]) -> PolarsResult<DataFrame> {
    let window_index: Vec<i64> = (0..subject_ids.len() as i64).collect();
    DataFrame::new(vec![
        Column::new("window_index".into(), window_index),
        Column::new("subject_id".into(), subject_ids.to_vec()),
        Column::new("elapsed_time".into(), elapsed_times(subject_ids)),
    ])
}

/// Read `subject_{split}.txt` into a subject table.
pub fn load_subjects(path: &Path) -> HarResult<DataFrame> {
    let subject_ids = read_int_column(path)?;
    Ok(subject_frame(&subject_ids)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{} != {}", a, e);
        }
    }

    #[test]
    fn test_clock_anchored_at_first_window() {
        // subject 7 owns windows 5, 6 and 9
        let ids = vec![1, 1, 1, 2, 2, 7, 7, 2, 2, 7];
        let times = elapsed_times(&ids);
        assert_close(&[times[5], times[6], times[9]], &[0.0, 1.28, 5.12]);
        assert_close(&[times[0], times[1], times[2]], &[0.0, 1.28, 2.56]);
        assert_close(&[times[3], times[4], times[7], times[8]], &[0.0, 1.28, 5.12, 6.4]);
    }

    #[test]
    fn test_subject_frame_columns() {
        let df = subject_frame(&[4, 4, 9]).unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|name| name.as_str()).collect();
        assert_eq!(names, vec!["window_index", "subject_id", "elapsed_time"]);
        assert_eq!(df.height(), 3);

        let windows: Vec<i64> = df.column("window_index").unwrap().i64().unwrap().into_no_null_iter().collect();
        assert_eq!(windows, vec![0, 1, 2]);

        let times: Vec<f64> = df.column("elapsed_time").unwrap().f64().unwrap().into_no_null_iter().collect();
        assert_close(&times, &[0.0, 1.28, 0.0]);
    }

    #[test]
    fn test_load_subjects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subject_train.txt");
        std::fs::write(&path, "1\n1\n3\n").unwrap();
        let df = load_subjects(&path).unwrap();
        assert_eq!(df.height(), 3);
    }
}
