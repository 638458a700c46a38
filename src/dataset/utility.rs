//! File layout of the extracted dataset and readers for its text formats.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::{Channel, HarError, HarResult, Split};

/// `features.txt` under the dataset root
pub fn features_file(root: &Path) -> PathBuf {
    root.join("features.txt")
}

/// `activity_labels.txt` under the dataset root
pub fn activity_labels_file(root: &Path) -> PathBuf {
    root.join("activity_labels.txt")
}

fn split_dir(root: &Path, split: Split) -> PathBuf {
    root.join(split.as_str())
}

/// `{split}/subject_{split}.txt`
pub fn subject_file(root: &Path, split: Split) -> PathBuf {
    split_dir(root, split).join(format!("subject_{}.txt", split))
}

/// `{split}/y_{split}.txt`
pub fn activity_file(root: &Path, split: Split) -> PathBuf {
    split_dir(root, split).join(format!("y_{}.txt", split))
}

/// `{split}/X_{split}.txt`
pub fn feature_vector_file(root: &Path, split: Split) -> PathBuf {
    split_dir(root, split).join(format!("X_{}.txt", split))
}

/// `{split}/Inertial Signals/{channel}_{split}.txt`
pub fn signal_file(root: &Path, split: Split, channel: Channel) -> PathBuf {
    split_dir(root, split)
        .join("Inertial Signals")
        .join(format!("{}_{}.txt", channel, split))
}

/// Non-blank lines of a text file with their 1-based line numbers.
fn read_lines(path: &Path) -> HarResult<Vec<(usize, String)>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line.to_string()))
        .collect())
}

/// Read a file holding one integer per line.
pub fn read_int_column(path: &Path) -> HarResult<Vec<i64>> {
    read_lines(path)?
        .into_iter()
        .map(|(line_no, line)| {
            line.trim()
                .parse::<i64>()
                .map_err(|e| HarError::parse(path, line_no, format!("invalid integer {:?}: {}", line.trim(), e)))
        })
        .collect()
}

/// Read a whitespace-separated numeric matrix, one row per non-blank line.
///
/// Each row is paired with its 1-based line number in the file.
pub fn read_matrix(path: &Path) -> HarResult<Vec<(usize, Vec<f64>)>> {
    read_lines(path)?
        .into_iter()
        .map(|(line_no, line)| {
            let row = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<f64>()
                        .map_err(|e| HarError::parse(path, line_no, format!("invalid number {:?}: {}", token, e)))
                })
                .collect::<HarResult<Vec<f64>>>()?;
            Ok((line_no, row))
        })
        .collect()
}

/// Read `<id> <name>` pairs, one per line.
pub fn read_id_name_pairs(path: &Path) -> HarResult<Vec<(i64, String)>> {
    read_lines(path)?
        .into_iter()
        .map(|(line_no, line)| {
            let mut parts = line.trim().splitn(2, char::is_whitespace);
            let id_token = parts.next().unwrap_or_default();
            let id = id_token
                .parse::<i64>()
                .map_err(|e| HarError::parse(path, line_no, format!("invalid id {:?}: {}", id_token, e)))?;
            let name = parts.next().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return Err(HarError::parse(path, line_no, "missing name"));
            }
            Ok((id, name.to_string()))
        })
        .collect()
}
