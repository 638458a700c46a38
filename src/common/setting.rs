//! Global settings of the dataset tool.
//!
//! Built-in defaults, overlaid by `har_setting.json` in the working folder.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use super::constant::DATASET_URL;
use super::error::HarResult;
use super::utility::get_file_path;

/// Setting filename
const SETTING_FILENAME: &str = "har_setting.json";

fn default_settings() -> HashMap<String, SettingValue> {
    let text = |value: &str| SettingValue::String(value.to_string());

    HashMap::from([
        ("data.url".to_string(), text(DATASET_URL)),
        ("data.folder".to_string(), text("data/raw")),
        ("cache.folder".to_string(), text("data/processed")),
        ("cache.verify".to_string(), SettingValue::Bool(true)),
        ("log.level".to_string(), SettingValue::Int(20)), // INFO
        ("log.console".to_string(), SettingValue::Bool(true)),
        ("log.file".to_string(), SettingValue::Bool(false)),
    ])
}

/// A JSON scalar from the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Read-only settings map
pub struct Settings {
    values: HashMap<String, SettingValue>,
}

impl Settings {
    /// Defaults overlaid by the settings file of the working folder
    pub fn new() -> Self {
        Self::from_file(&get_file_path(SETTING_FILENAME))
    }

    /// Defaults overlaid by the JSON object in `path`.
    ///
    /// A missing or malformed file leaves the defaults untouched; logging is
    /// configured from these settings, so there is nowhere to report it yet.
    pub fn from_file(path: &Path) -> Self {
        let mut values = default_settings();
        let overrides = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str::<HashMap<String, SettingValue>>(&content).ok());
        if let Some(overrides) = overrides {
            values.extend(overrides);
        }
        Self { values }
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            SettingValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key)? {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key)? {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Write the settings file of the working folder
    pub fn save(&self) -> HarResult<()> {
        self.save_to(&get_file_path(SETTING_FILENAME))
    }

    /// Write the current map to `path` as pretty JSON
    pub fn save_to(&self, path: &Path) -> HarResult<()> {
        fs::write(path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Global settings instance
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::new);
