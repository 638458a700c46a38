//! Miniature dataset tree for tests.

use std::fs;
use std::path::{Path, PathBuf};

use super::utility::{
    activity_file, activity_labels_file, feature_vector_file, features_file, signal_file,
    subject_file,
};
use crate::common::{Channel, Split, DATASET_FOLDER, WINDOW_STEPS};

/// Contents of a synthetic dataset, written identically for both splits.
pub struct SyntheticDataset {
    pub subjects: Vec<i64>,
    pub activities: Vec<i64>,
    pub features: Vec<(i64, String)>,
}

impl Default for SyntheticDataset {
    fn default() -> Self {
        Self {
            subjects: vec![1, 1],
            activities: vec![3, 4],
            features: vec![
                (1, "tBodyAcc-mean()-X".to_string()),
                (2, "fBodyAcc-bandsEnergy()-1,8".to_string()),
                (3, "fBodyAcc-bandsEnergy()-1,8".to_string()),
            ],
        }
    }
}

impl SyntheticDataset {
    /// Value at `step` of `window` for the channel at `channel` in `Channel::ALL`.
    pub fn signal_value(&self, channel: usize, window: usize, step: usize) -> f64 {
        (channel * 1000 + window * 100 + step) as f64 + 0.25
    }

    pub fn feature_value(&self, window: usize, feature: usize) -> f64 {
        window as f64 * 0.5 + feature as f64 * 0.125 + 0.0625
    }

    fn lines<T: ToString>(values: &[T]) -> String {
        values.iter().map(|v| format!("{}\n", v.to_string())).collect()
    }

    fn write_split(&self, root: &Path, split: Split) {
        let windows = self.subjects.len();

        write_file(&subject_file(root, split), &Self::lines(&self.subjects));
        write_file(&activity_file(root, split), &Self::lines(&self.activities));

        let vectors: String = (0..windows)
            .map(|w| {
                let row: Vec<String> = (0..self.features.len())
                    .map(|f| format!("{:e}", self.feature_value(w, f)))
                    .collect();
                format!(" {}\n", row.join(" "))
            })
            .collect();
        write_file(&feature_vector_file(root, split), &vectors);

        for (idx, channel) in Channel::ALL.iter().enumerate() {
            // rows carry a second, overlapping half that must be ignored
            let matrix: String = (0..windows)
                .map(|w| {
                    let row: Vec<String> = (0..2 * WINDOW_STEPS)
                        .map(|s| self.signal_value(idx, w, s).to_string())
                        .collect();
                    format!("  {}\n", row.join("  "))
                })
                .collect();
            write_file(&signal_file(root, split, *channel), &matrix);
        }
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Write the dataset under `base/UCI HAR Dataset` and return that root.
pub fn write_synthetic_dataset(base: &Path, dataset: &SyntheticDataset) -> PathBuf {
    let root = base.join(DATASET_FOLDER);

    let features: String = dataset
        .features
        .iter()
        .map(|(id, name)| format!("{} {}\n", id, name))
        .collect();
    write_file(&features_file(&root), &features);
    write_file(
        &activity_labels_file(&root),
        "1 WALKING\n2 WALKING_UPSTAIRS\n3 WALKING_DOWNSTAIRS\n4 SITTING\n5 STANDING\n6 LAYING\n",
    );

    for split in Split::ALL {
        dataset.write_split(&root, split);
    }
    root
}
