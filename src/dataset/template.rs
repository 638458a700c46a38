//! Assembly of the raw-signal and feature tables for one split.
//!
//! Raw table columns: `subject_id, elapsed_time, <channels>, activity_id`, one
//! row per sample. Feature table columns: `subject_id, elapsed_time,
//! <features>, activity_id`, one row per window.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{debug, info};

use super::names::load_feature_names;
use super::signal::load_signal;
use super::subject::load_subjects;
use super::utility::{
    activity_file, feature_vector_file, features_file, read_int_column, read_matrix,
    signal_file, subject_file,
};
use crate::common::{Channel, HarError, HarResult, Split, SAMPLE_PERIOD, WINDOW_STEPS};

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn activity_frame(activity_ids: Vec<i64>) -> PolarsResult<DataFrame> {
    let window_index: Vec<i64> = (0..activity_ids.len() as i64).collect();
    DataFrame::new(vec![
        Column::new("window_index".into(), window_index),
        Column::new("activity_id".into(), activity_ids),
    ])
}

/// Files the raw table of `split` is built from.
pub fn raw_inputs(root: &Path, split: Split) -> Vec<PathBuf> {
    let mut inputs = vec![subject_file(root, split), activity_file(root, split)];
    inputs.extend(Channel::ALL.iter().map(|channel| signal_file(root, split, *channel)));
    inputs
}

/// Files the feature table of `split` is built from.
pub fn feature_inputs(root: &Path, split: Split) -> Vec<PathBuf> {
    vec![
        features_file(root),
        subject_file(root, split),
        feature_vector_file(root, split),
        activity_file(root, split),
    ]
}

/// Build the raw table with all nine channels.
pub fn build_raw_dataset(root: &Path, split: Split) -> HarResult<DataFrame> {
    assemble_raw(root, split, &Channel::ALL)
}

/// Build the raw table from the given channels, in the given order.
///
/// Every source must describe the same number of windows; the joined result
/// must hold exactly `windows * WINDOW_STEPS` rows.
pub fn assemble_raw(root: &Path, split: Split, channels: &[Channel]) -> HarResult<DataFrame> {
    let (first, rest) = channels
        .split_first()
        .ok_or_else(|| HarError::mismatch("signal channels", Channel::ALL.len(), 0))?;

    let subjects = load_subjects(&subject_file(root, split))?;
    let windows = subjects.height();
    let expected_rows = windows * WINDOW_STEPS;

    let label_path = activity_file(root, split);
    let activity_ids = read_int_column(&label_path)?;
    if activity_ids.len() != windows {
        return Err(HarError::mismatch(file_label(&label_path), windows, activity_ids.len()));
    }
    let activities = activity_frame(activity_ids)?;

    let load_channel = |channel: &Channel| -> HarResult<DataFrame> {
        let path = signal_file(root, split, *channel);
        let df = load_signal(channel.value(), &path)?;
        if df.height() != expected_rows {
            return Err(HarError::mismatch(file_label(&path), expected_rows, df.height()));
        }
        debug!(channel = %channel, rows = df.height(), "Signal loaded");
        Ok(df)
    };

    let mut signals = load_channel(first)?.lazy();
    for channel in rest {
        signals = signals
            .join_builder()
            .with(load_channel(channel)?.lazy())
            .how(JoinType::Inner)
            .on([col("window_index"), col("time_step")])
            .finish();
    }

    let mut projection = vec![col("subject_id"), col("elapsed_time")];
    projection.extend(channels.iter().map(|channel| col(channel.value())));
    projection.push(col("activity_id"));

    let df = signals
        .join_builder()
        .with(subjects.lazy())
        .how(JoinType::Inner)
        .on([col("window_index")])
        .finish()
        .join_builder()
        .with(activities.lazy())
        .how(JoinType::Inner)
        .on([col("window_index")])
        .finish()
        .with_column(
            (col("elapsed_time") + col("time_step").cast(DataType::Float64) * lit(SAMPLE_PERIOD))
                .alias("elapsed_time"),
        )
        .sort_by_exprs(
            [col("window_index"), col("time_step")],
            SortMultipleOptions::default(),
        )
        .select(projection)
        .collect()?;

    if df.height() != expected_rows {
        return Err(HarError::mismatch(format!("raw {} join", split), expected_rows, df.height()));
    }

    info!(split = %split, rows = df.height(), channels = channels.len(), "Raw dataset assembled");
    Ok(df)
}

/// Build the feature table.
///
/// Sources are aligned by row position, so each must have one row per
/// window and every feature row one value per feature name.
pub fn build_feature_dataset(root: &Path, split: Split) -> HarResult<DataFrame> {
    let feature_names = load_feature_names(&features_file(root))?;

    let subjects = load_subjects(&subject_file(root, split))?;
    let windows = subjects.height();

    let vector_path = feature_vector_file(root, split);
    let vectors = read_matrix(&vector_path)?;
    if vectors.len() != windows {
        return Err(HarError::mismatch(file_label(&vector_path), windows, vectors.len()));
    }
    if let Some((line, row)) = vectors.iter().find(|(_, row)| row.len() != feature_names.len()) {
        return Err(HarError::parse(
            &vector_path,
            *line,
            format!("expected {} feature values, found {}", feature_names.len(), row.len()),
        ));
    }

    let label_path = activity_file(root, split);
    let activity_ids = read_int_column(&label_path)?;
    if activity_ids.len() != windows {
        return Err(HarError::mismatch(file_label(&label_path), windows, activity_ids.len()));
    }

    let mut columns: Vec<Column> = Vec::with_capacity(feature_names.len() + 3);
    columns.push(subjects.column("subject_id")?.clone());
    columns.push(subjects.column("elapsed_time")?.clone());
    for (idx, name) in feature_names.iter().enumerate() {
        let values: Vec<f64> = vectors.iter().map(|(_, row)| row[idx]).collect();
        columns.push(Column::new(name.as_str().into(), values));
    }
    columns.push(Column::new("activity_id".into(), activity_ids));

    let df = DataFrame::new(columns)?;
    info!(split = %split, rows = df.height(), features = feature_names.len(), "Feature dataset assembled");
    Ok(df)
}
