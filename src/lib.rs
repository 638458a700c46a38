//! HAR Dataset - fetch and reshape the UCI Human Activity Recognition dataset
//!
//! This crate provides:
//!
//! - Download and extraction of the dataset archive
//! - A raw signal table: one row per subject and sample, nine sensor channels
//! - A feature table: one row per window, one column per extracted feature
//! - CSV caching of both tables, checked against the input files
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use har_dataset::{HarLab, Split};
//!
//! #[tokio::main]
//! async fn main() -> har_dataset::HarResult<()> {
//!     let lab = HarLab::new();
//!     lab.fetch().await?;
//!
//!     let raw = lab.load_raw_dataset(Split::Train)?;
//!     let features = lab.load_feature_dataset(Split::Train)?;
//!     println!("{:?} {:?}", raw.shape(), features.shape());
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod dataset;
pub mod lab;

pub use common::{
    init_logger, Channel, HarError, HarResult, Split, TableKind, SAMPLE_PERIOD, WINDOW_SPACING,
    WINDOW_STEPS,
};
pub use dataset::{ActivityLabel, CacheState};
pub use lab::HarLab;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
