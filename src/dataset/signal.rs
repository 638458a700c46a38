//! Inertial signal windows reshaped to long format.

use std::path::Path;

use polars::prelude::*;

use super::utility::read_matrix;
use crate::common::{HarError, HarResult, WINDOW_STEPS};

/// Reshape a window matrix into `(window_index, time_step, <name>)` rows.
///
/// Only the first `WINDOW_STEPS` values of each row are kept; the rest
/// overlap the following window. Rows come out ordered by window, then step.
/// Every row must hold at least `WINDOW_STEPS` values.
fn signal_frame(name: &str, matrix: &[Vec<f64>]) -> PolarsResult<DataFrame> {
    let rows = matrix.len() * WINDOW_STEPS;
    let mut window_index: Vec<i64> = Vec::with_capacity(rows);
    let mut time_step: Vec<i64> = Vec::with_capacity(rows);
    let mut values: Vec<f64> = Vec::with_capacity(rows);

    for (window, row) in matrix.iter().enumerate() {
        for (step, value) in row.iter().take(WINDOW_STEPS).enumerate() {
            window_index.push(window as i64);
            time_step.push(step as i64);
            values.push(*value);
        }
    }

    DataFrame::new(vec![
        Column::new("window_index".into(), window_index),
        Column::new("time_step".into(), time_step),
        Column::new(name.into(), values),
    ])
}

/// Read one `{channel}_{split}.txt` file into long format.
pub fn load_signal(name: &str, path: &Path) -> HarResult<DataFrame> {
    let mut matrix = Vec::new();
    for (line, row) in read_matrix(path)? {
        if row.len() < WINDOW_STEPS {
            return Err(HarError::parse(
                path,
                line,
                format!("expected at least {} values, found {}", WINDOW_STEPS, row.len()),
            ));
        }
        matrix.push(row);
    }
    Ok(signal_frame(name, &matrix)?)
}
