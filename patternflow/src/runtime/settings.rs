use serde::{Deserialize, Serialize};

use super::storage;

pub const SETTINGS_VERSION: &str = "1";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GallerySettings {
    pub version: String,
    /// Root for saved parameter snapshots
    pub user_data_dir: String,
    /// Extra pattern files to register at startup. Empty to disable.
    pub patterns_dir: String,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION.to_string(),
            user_data_dir: storage::default_user_data_dir(),
            patterns_dir: String::new(),
        }
    }
}
