//! Error type shared by the whole crate.

use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

/// Errors raised while fetching, parsing, assembling or caching the dataset.
#[derive(Debug, Error)]
pub enum HarError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("table error: {0}")]
    Table(#[from] PolarsError),

    #[error("settings error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{path:?} line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Two sources that must line up row-for-row do not.
    #[error("misaligned input: {source_name} has {found} rows, expected {expected}")]
    Mismatch {
        source_name: String,
        expected: usize,
        found: usize,
    },

    #[error("unknown split {0:?}, expected \"train\" or \"test\"")]
    UnknownSplit(String),
}

impl HarError {
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        HarError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    pub fn mismatch(source_name: impl Into<String>, expected: usize, found: usize) -> Self {
        HarError::Mismatch {
            source_name: source_name.into(),
            expected,
            found,
        }
    }
}

pub type HarResult<T> = Result<T, HarError>;
