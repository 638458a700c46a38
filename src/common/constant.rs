//! General constant enums used by the dataset pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::HarError;

/// Default location of the zipped UCI HAR dataset.
pub const DATASET_URL: &str =
    "https://archive.ics.uci.edu/ml/machine-learning-databases/00240/UCI%20HAR%20Dataset.zip";

/// Folder the archive unpacks into.
pub const DATASET_FOLDER: &str = "UCI HAR Dataset";

/// Significant samples at the start of every window row.
pub const WINDOW_STEPS: usize = 64;

/// Offset between the starts of two consecutive windows.
pub const WINDOW_SPACING: f64 = 1.28;

/// Offset between two samples inside a window.
pub const SAMPLE_PERIOD: f64 = 0.02;

/// Dataset partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Split {
    type Err = HarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "train" => Ok(Split::Train),
            "test" => Ok(Split::Test),
            _ => Err(HarError::UnknownSplit(s.to_string())),
        }
    }
}

/// One inertial sensor axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Body acceleration, X axis
    BodyAccX,
    /// Body acceleration, Y axis
    BodyAccY,
    /// Body acceleration, Z axis
    BodyAccZ,
    /// Angular velocity, X axis
    BodyGyroX,
    /// Angular velocity, Y axis
    BodyGyroY,
    /// Angular velocity, Z axis
    BodyGyroZ,
    /// Total acceleration, X axis
    TotalAccX,
    /// Total acceleration, Y axis
    TotalAccY,
    /// Total acceleration, Z axis
    TotalAccZ,
}

impl Channel {
    /// All channels in output column order.
    pub const ALL: [Channel; 9] = [
        Channel::BodyAccX,
        Channel::BodyAccY,
        Channel::BodyAccZ,
        Channel::BodyGyroX,
        Channel::BodyGyroY,
        Channel::BodyGyroZ,
        Channel::TotalAccX,
        Channel::TotalAccY,
        Channel::TotalAccZ,
    ];

    /// Column name, also the file stem of the channel's signal file.
    pub fn value(&self) -> &'static str {
        match self {
            Channel::BodyAccX => "body_acc_x",
            Channel::BodyAccY => "body_acc_y",
            Channel::BodyAccZ => "body_acc_z",
            Channel::BodyGyroX => "body_gyro_x",
            Channel::BodyGyroY => "body_gyro_y",
            Channel::BodyGyroZ => "body_gyro_z",
            Channel::TotalAccX => "total_acc_x",
            Channel::TotalAccY => "total_acc_y",
            Channel::TotalAccZ => "total_acc_z",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Kind of cached table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Raw,
    Feature,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::Raw, TableKind::Feature];

    pub fn value(&self) -> &'static str {
        match self {
            TableKind::Raw => "raw",
            TableKind::Feature => "feature",
        }
    }
}
