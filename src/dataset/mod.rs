//! Dataset module: fetching, parsing and reshaping the UCI HAR files.

pub mod cache;
pub mod fetcher;
pub mod names;
pub mod signal;
pub mod subject;
pub mod template;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::{cache_file_name, check_cache, CacheState};
pub use fetcher::{extract_archive, fetch_dataset, install_archive};
pub use names::{load_activity_labels, load_feature_names, unique_feature_names, ActivityLabel};
pub use signal::load_signal;
pub use subject::{elapsed_times, load_subjects, subject_frame};
pub use template::{
    assemble_raw, build_feature_dataset, build_raw_dataset, feature_inputs, raw_inputs,
};
