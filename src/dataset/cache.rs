//! CSV table cache with input fingerprints.
//!
//! Each cached table `X.csv` may carry a sidecar `X.csv.sha256` holding the
//! SHA-256 of the input files it was built from.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use polars::prelude::*;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::common::{HarResult, Split, TableKind};

/// Bumped whenever the table layout changes, so old fingerprints go stale.
const FORMAT_VERSION: &str = "har-table-v1";

/// State of a cache file relative to its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No cache file.
    Missing,
    /// Fingerprint matches the current inputs.
    Fresh,
    /// Fingerprint differs from the current inputs.
    Stale,
    /// Cache exists but could not be or was not checked.
    Unverified,
}

/// `{kind}_{split}_df.csv`
pub fn cache_file_name(kind: TableKind, split: Split) -> String {
    format!("{}_{}_df.csv", kind.value(), split)
}

/// Sidecar holding the fingerprint of `cache_path`.
pub fn sidecar_path(cache_path: &Path) -> PathBuf {
    let mut name = OsString::from(cache_path.as_os_str());
    name.push(".sha256");
    PathBuf::from(name)
}

/// Hex SHA-256 over the names and contents of `inputs`, in order.
pub fn fingerprint(inputs: &[PathBuf]) -> HarResult<String> {
    let mut hasher = Sha256::new();
    hasher.update(FORMAT_VERSION.as_bytes());
    for path in inputs {
        let content = fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        hasher.update(name.as_bytes());
        hasher.update((content.len() as u64).to_le_bytes());
        hasher.update(&content);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Decide whether `cache_path` can be served.
pub fn check_cache(cache_path: &Path, inputs: &[PathBuf], verify: bool) -> CacheState {
    if !cache_path.exists() {
        return CacheState::Missing;
    }
    if !verify {
        return CacheState::Unverified;
    }

    let stored = match fs::read_to_string(sidecar_path(cache_path)) {
        Ok(stored) => stored,
        Err(_) => {
            debug!(path = %cache_path.display(), "No fingerprint beside cache");
            return CacheState::Unverified;
        }
    };

    match fingerprint(inputs) {
        Ok(current) if current == stored.trim() => CacheState::Fresh,
        Ok(_) => CacheState::Stale,
        Err(e) => {
            warn!(path = %cache_path.display(), error = %e, "Cannot fingerprint inputs, serving cache unchecked");
            CacheState::Unverified
        }
    }
}

/// Columns stored as integers; every other column is a float.
const ID_COLUMNS: [&str; 2] = ["subject_id", "activity_id"];

/// Type of a cached column, fixed by its name.
pub fn column_dtype(name: &str) -> DataType {
    if ID_COLUMNS.contains(&name) {
        DataType::Int64
    } else {
        DataType::Float64
    }
}

/// Read a cached table.
///
/// Column types come from `column_dtype`, not from the file contents, so a
/// header-only file reads back with the same types it was written with.
pub fn read_table(path: &Path) -> HarResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let typed: Vec<Expr> = df
        .get_column_names()
        .iter()
        .map(|name| col(name.as_str()).strict_cast(column_dtype(name.as_str())))
        .collect();
    Ok(df.lazy().select(typed).collect()?)
}

/// Write `df` to `path` as CSV with a header, creating parent folders.
pub fn write_table(path: &Path, df: &mut DataFrame) -> HarResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;
    Ok(())
}

/// Write the fingerprint sidecar of `cache_path`.
pub fn write_fingerprint(cache_path: &Path, inputs: &[PathBuf]) -> HarResult<()> {
    fs::write(sidecar_path(cache_path), fingerprint(inputs)?)?;
    Ok(())
}

/// Remove a cache file and its sidecar; absent files are ignored.
pub fn remove_cache(cache_path: &Path) -> HarResult<bool> {
    let mut removed = false;
    for path in [cache_path.to_path_buf(), sidecar_path(cache_path)] {
        match fs::remove_file(&path) {
            Ok(()) => removed = true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(removed)
}
