//! Constants, settings, logging and errors shared across the crate.

pub mod constant;
pub mod error;
pub mod logger;
pub mod setting;
pub mod utility;

pub use constant::{
    Channel, Split, TableKind, DATASET_FOLDER, DATASET_URL, SAMPLE_PERIOD, WINDOW_SPACING,
    WINDOW_STEPS,
};
pub use error::{HarError, HarResult};
pub use logger::init_logger;
pub use setting::{SettingValue, Settings, SETTINGS};
