//! Download and unpack the dataset archive.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::common::{HarError, HarResult, DATASET_FOLDER};

/// Ensure the dataset is extracted under `destination`.
///
/// Does nothing when `destination/UCI HAR Dataset` already exists. Otherwise
/// the whole archive is fetched into memory and installed with
/// `install_archive`. No retries.
pub async fn fetch_dataset(url: &str, destination: &Path) -> HarResult<()> {
    let target = destination.join(DATASET_FOLDER);
    if target.exists() {
        info!(path = %target.display(), "Dataset already present, skipping download");
        return Ok(());
    }

    info!(url, "Downloading dataset archive");
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    info!(size = bytes.len(), "Archive downloaded");

    install_archive(&bytes, destination)
}

/// Scratch folder an archive is unpacked into before it is moved in place.
pub fn staging_dir(destination: &Path) -> PathBuf {
    destination.join(format!(".{}.partial", DATASET_FOLDER))
}

/// Unpack an archive so that `destination/UCI HAR Dataset` appears whole or
/// not at all.
///
/// Entries go to a staging folder first; only its `UCI HAR Dataset` folder is
/// renamed into place. The staging folder is removed on success and failure.
pub fn install_archive(bytes: &[u8], destination: &Path) -> HarResult<()> {
    fs::create_dir_all(destination)?;

    let staging = staging_dir(destination);
    if staging.exists() {
        warn!(path = %staging.display(), "Removing leftover staging folder");
        fs::remove_dir_all(&staging)?;
    }

    let result = extract_archive(bytes, &staging).and_then(|()| {
        let extracted = staging.join(DATASET_FOLDER);
        if !extracted.is_dir() {
            return Err(HarError::Archive(ZipError::FileNotFound));
        }
        fs::rename(&extracted, destination.join(DATASET_FOLDER))?;
        Ok(())
    });

    if staging.exists() {
        if let Err(e) = fs::remove_dir_all(&staging) {
            warn!(path = %staging.display(), error = %e, "Cannot remove staging folder");
        }
    }
    result
}

/// Unpack every entry of an in-memory zip archive into `destination`.
pub fn extract_archive(bytes: &[u8], destination: &Path) -> HarResult<()> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let entries = archive.len();
    archive.extract(destination)?;
    info!(entries, path = %destination.display(), "Archive extracted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_archive(files: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in files {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_archive() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = build_archive(&[
            ("UCI HAR Dataset/features.txt", "1 tBodyAcc-mean()-X\n"),
            ("UCI HAR Dataset/train/y_train.txt", "5\n5\n"),
        ]);

        extract_archive(&bytes, dir.path()).unwrap();

        let root = dir.path().join(DATASET_FOLDER);
        assert_eq!(fs::read_to_string(root.join("features.txt")).unwrap(), "1 tBodyAcc-mean()-X\n");
        assert_eq!(fs::read_to_string(root.join("train").join("y_train.txt")).unwrap(), "5\n5\n");
    }

    #[test]
    fn test_extract_rejects_non_zip() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_archive(b"not a zip file", dir.path());
        assert!(matches!(result, Err(HarError::Archive(_))));
    }

    #[test]
    fn test_install_archive_moves_dataset_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = build_archive(&[("UCI HAR Dataset/train/y_train.txt", "5\n")]);

        install_archive(&bytes, dir.path()).unwrap();

        let root = dir.path().join(DATASET_FOLDER);
        assert_eq!(fs::read_to_string(root.join("train").join("y_train.txt")).unwrap(), "5\n");
        assert!(!staging_dir(dir.path()).exists());
    }

    #[test]
    fn test_install_archive_leaves_nothing_on_failure() {
        let dir = tempfile::tempdir().unwrap();

        let result = install_archive(b"truncated download", dir.path());
        assert!(matches!(result, Err(HarError::Archive(_))));
        assert!(!dir.path().join(DATASET_FOLDER).exists());
        assert!(!staging_dir(dir.path()).exists());

        // entries were written to staging, but not under the dataset folder
        let bytes = build_archive(&[("other/readme.txt", "hello\n")]);
        let result = install_archive(&bytes, dir.path());
        assert!(matches!(result, Err(HarError::Archive(ZipError::FileNotFound))));
        assert!(!dir.path().join(DATASET_FOLDER).exists());
        assert!(!staging_dir(dir.path()).exists());
    }

    #[test]
    fn test_install_archive_replaces_leftover_staging() {
        let dir = tempfile::tempdir().unwrap();
        let leftover = staging_dir(dir.path()).join(DATASET_FOLDER);
        fs::create_dir_all(&leftover).unwrap();
        fs::write(leftover.join("stale.txt"), "half written").unwrap();

        let bytes = build_archive(&[("UCI HAR Dataset/features.txt", "1 tBodyAcc-mean()-X\n")]);
        install_archive(&bytes, dir.path()).unwrap();

        let root = dir.path().join(DATASET_FOLDER);
        assert!(root.join("features.txt").exists());
        assert!(!root.join("stale.txt").exists());
        assert!(!staging_dir(dir.path()).exists());
    }

    #[tokio::test]
    async fn test_fetch_is_noop_when_extracted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(DATASET_FOLDER)).unwrap();

        // An unroutable URL proves no request is made.
        fetch_dataset("http://127.0.0.1:9/unreachable.zip", dir.path())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_fetch_network_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let result = fetch_dataset("http://127.0.0.1:9/unreachable.zip", dir.path()).await;
        assert!(matches!(result, Err(HarError::Http(_))));
        assert!(!dir.path().join(DATASET_FOLDER).exists());
        assert!(!staging_dir(dir.path()).exists());
    }
}
