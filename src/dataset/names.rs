//! Feature and activity vocabularies.

use std::collections::HashMap;
use std::path::Path;

use super::utility::read_id_name_pairs;
use crate::common::HarResult;

/// Build unique column names from `(id, name)` pairs.
///
/// A name that occurs once is kept as is. Every occurrence of a repeated name
/// becomes `{name}_{id}`. Output follows ascending id order.
pub fn unique_feature_names(features: &[(i64, String)]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for (_, name) in features {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }

    let mut ordered: Vec<&(i64, String)> = features.iter().collect();
    ordered.sort_by_key(|(id, _)| *id);

    ordered
        .into_iter()
        .map(|(id, name)| {
            if counts[name.as_str()] > 1 {
                format!("{}_{}", name, id)
            } else {
                name.clone()
            }
        })
        .collect()
}

/// Read `features.txt` and resolve its column names.
pub fn load_feature_names(path: &Path) -> HarResult<Vec<String>> {
    let features = read_id_name_pairs(path)?;
    Ok(unique_feature_names(&features))
}

/// One entry of `activity_labels.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLabel {
    pub activity_id: i64,
    pub name: String,
}

/// Read `activity_labels.txt`, ordered by id.
pub fn load_activity_labels(path: &Path) -> HarResult<Vec<ActivityLabel>> {
    let mut labels: Vec<ActivityLabel> = read_id_name_pairs(path)?
        .into_iter()
        .map(|(activity_id, name)| ActivityLabel { activity_id, name })
        .collect();
    labels.sort_by_key(|label| label.activity_id);
    Ok(labels)
}
