//! HAR Dataset - command line entry point
//!
//! Fetches the dataset if needed, then materialises the raw and feature
//! tables of both splits into the cache folder.

use std::process::ExitCode;

use tracing::{error, info};

use har_dataset::{init_logger, HarLab, HarResult, Split};

async fn run() -> HarResult<()> {
    let lab = HarLab::new();
    info!(data = %lab.data_path.display(), cache = %lab.cache_path.display(), "Lab configured");

    lab.fetch().await?;

    for label in lab.load_activity_labels()? {
        info!(activity_id = label.activity_id, name = %label.name, "Activity");
    }

    for split in Split::ALL {
        let raw = lab.load_raw_dataset(split)?;
        info!(split = %split, rows = raw.height(), columns = raw.width(), "Raw table ready");

        let features = lab.load_feature_dataset(split)?;
        info!(split = %split, rows = features.height(), columns = features.width(), "Feature table ready");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    info!("Version: {}", har_dataset::VERSION);
    info!("Rust version: {}", rustc_version_runtime::version());

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Dataset preparation failed");
            ExitCode::FAILURE
        }
    }
}
