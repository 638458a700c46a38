//! General utility functions.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Name of the working folder holding settings and logs.
const WORK_FOLDER_NAME: &str = ".hardataset";

/// Resolve the working folder: the current directory's copy if present,
/// otherwise one under the home directory.
fn get_work_dir(temp_name: &str) -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let temp_path = cwd.join(temp_name);

    if temp_path.exists() {
        return temp_path;
    }

    let home_path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let temp_path = home_path.join(temp_name);

    if !temp_path.exists() {
        let _ = fs::create_dir_all(&temp_path);
    }

    temp_path
}

/// The working folder
pub static TEMP_DIR: LazyLock<PathBuf> = LazyLock::new(|| get_work_dir(WORK_FOLDER_NAME));

/// Get path for a file in the working folder
pub fn get_file_path(filename: &str) -> PathBuf {
    TEMP_DIR.join(filename)
}

/// Get path for a sub-folder of the working folder, creating it if needed
pub fn get_folder_path(folder_name: &str) -> PathBuf {
    let folder_path = TEMP_DIR.join(folder_name);
    if !folder_path.exists() {
        let _ = fs::create_dir_all(&folder_path);
    }
    folder_path
}
