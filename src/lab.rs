//! HAR Lab: owns the data and cache folders and serves cached tables.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::{info, warn};

use crate::common::{HarResult, Split, TableKind, DATASET_FOLDER, DATASET_URL, SETTINGS};
use crate::dataset::cache::{
    cache_file_name, check_cache, read_table, remove_cache, write_fingerprint, write_table,
    CacheState,
};
use crate::dataset::utility::activity_labels_file;
use crate::dataset::{
    build_feature_dataset, build_raw_dataset, feature_inputs, fetch_dataset, load_activity_labels,
    raw_inputs, ActivityLabel,
};

/// Entry point for fetching the dataset and loading its tables.
///
/// Cache files are not locked; run at most one lab per cache folder and split
/// at a time.
#[derive(Debug, Clone)]
pub struct HarLab {
    /// Archive URL
    pub url: String,
    /// Folder the archive is extracted into
    pub data_path: PathBuf,
    /// Folder holding the cached CSV tables
    pub cache_path: PathBuf,
    /// Check cache fingerprints against the input files before serving
    pub verify_cache: bool,
}

impl HarLab {
    /// Create a lab configured from the global settings
    pub fn new() -> Self {
        HarLab {
            url: SETTINGS.get_string("data.url").unwrap_or_else(|| DATASET_URL.to_string()),
            data_path: PathBuf::from(
                SETTINGS.get_string("data.folder").unwrap_or_else(|| "data/raw".to_string()),
            ),
            cache_path: PathBuf::from(
                SETTINGS.get_string("cache.folder").unwrap_or_else(|| "data/processed".to_string()),
            ),
            verify_cache: SETTINGS.get_bool("cache.verify").unwrap_or(true),
        }
    }

    /// Create a lab over explicit folders, with default URL and verification on
    pub fn with_paths(data_path: impl Into<PathBuf>, cache_path: impl Into<PathBuf>) -> Self {
        HarLab {
            url: DATASET_URL.to_string(),
            data_path: data_path.into(),
            cache_path: cache_path.into(),
            verify_cache: true,
        }
    }

    /// Root of the extracted dataset
    pub fn dataset_root(&self) -> PathBuf {
        self.data_path.join(DATASET_FOLDER)
    }

    /// Path of the cache file for a table
    pub fn cache_file(&self, kind: TableKind, split: Split) -> PathBuf {
        self.cache_path.join(cache_file_name(kind, split))
    }

    /// Download and extract the dataset unless already present
    pub async fn fetch(&self) -> HarResult<()> {
        fetch_dataset(&self.url, &self.data_path).await
    }

    /// Raw signal table of a split, from cache when possible
    pub fn load_raw_dataset(&self, split: Split) -> HarResult<DataFrame> {
        let root = self.dataset_root();
        self.load_cached(TableKind::Raw, split, raw_inputs(&root, split), || {
            build_raw_dataset(&root, split)
        })
    }

    /// Feature table of a split, from cache when possible
    pub fn load_feature_dataset(&self, split: Split) -> HarResult<DataFrame> {
        let root = self.dataset_root();
        self.load_cached(TableKind::Feature, split, feature_inputs(&root, split), || {
            build_feature_dataset(&root, split)
        })
    }

    /// Activity id to name vocabulary
    pub fn load_activity_labels(&self) -> HarResult<Vec<ActivityLabel>> {
        load_activity_labels(&activity_labels_file(&self.dataset_root()))
    }

    /// Delete cached tables of one split, or of all splits when `None`.
    /// Returns the number of tables removed.
    pub fn clear_cache(&self, split: Option<Split>) -> HarResult<usize> {
        let splits: Vec<Split> = match split {
            Some(split) => vec![split],
            None => Split::ALL.to_vec(),
        };

        let mut removed = 0;
        for split in splits {
            for kind in TableKind::ALL {
                let path = self.cache_file(kind, split);
                if remove_cache(&path)? {
                    info!(path = %path.display(), "Cache removed");
                    removed += 1;
                }
            }
        }
        Ok(removed)
    }

    fn load_cached<F>(
        &self,
        kind: TableKind,
        split: Split,
        inputs: Vec<PathBuf>,
        build: F,
    ) -> HarResult<DataFrame>
    where
        F: FnOnce() -> HarResult<DataFrame>,
    {
        let path = self.cache_file(kind, split);

        match check_cache(&path, &inputs, self.verify_cache) {
            CacheState::Fresh | CacheState::Unverified => {
                let df = read_table(&path)?;
                info!(path = %path.display(), rows = df.height(), "Loaded cached table");
                return Ok(df);
            }
            CacheState::Stale => {
                warn!(path = %path.display(), "Inputs changed since cache was written, rebuilding");
            }
            CacheState::Missing => {}
        }

        let mut df = build()?;
        self.store(&path, &inputs, &mut df)?;
        Ok(df)
    }

    fn store(&self, path: &Path, inputs: &[PathBuf], df: &mut DataFrame) -> HarResult<()> {
        write_table(path, df)?;
        write_fingerprint(path, inputs)?;
        info!(path = %path.display(), rows = df.height(), "Cached table written");
        Ok(())
    }
}

impl Default for HarLab {
    fn default() -> Self {
        Self::new()
    }
}
