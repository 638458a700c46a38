//! Logging setup.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::error::HarResult;
use super::setting::SETTINGS;
use super::utility::get_folder_path;

/// Log level constants (same scale as the settings file)
pub const DEBUG: i32 = 10;
pub const INFO: i32 = 20;
pub const WARNING: i32 = 30;
pub const ERROR: i32 = 40;

/// Convert integer log level to tracing Level
pub fn level_from_int(level: i32) -> Level {
    match level {
        i32::MIN..=10 => Level::DEBUG,
        11..=20 => Level::INFO,
        21..=30 => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Initialize the global subscriber from the `log.*` settings.
///
/// `RUST_LOG` directives are honoured on top of `log.level`. Calling this a
/// second time leaves the first subscriber in place.
pub fn init_logger() -> HarResult<()> {
    let log_level = SETTINGS.get_int("log.level").unwrap_or(INFO as i64) as i32;
    let log_console = SETTINGS.get_bool("log.console").unwrap_or(true);
    let log_file = SETTINGS.get_bool("log.file").unwrap_or(false);

    let level = level_from_int(log_level);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let console_layer = log_console.then(|| {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(true)
    });

    let file_layer = if log_file {
        let log_path = get_log_file_path();
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
        Some(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    Ok(())
}

/// Get the log file path for today
fn get_log_file_path() -> PathBuf {
    let log_folder = get_folder_path("log");
    let today = Local::now().format("%Y%m%d").to_string();
    log_folder.join(format!("har_{}.log", today))
}
