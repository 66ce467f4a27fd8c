//! Vision settings from TOML (`[vision]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVisionConfig {
    /// Directory for saved images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_dir: Option<PathBuf>,
}

impl FileVisionConfig {
    /// Configured directory, else `<pictures>/nationsense`, else the
    /// working directory
    pub fn resolved_save_dir(&self) -> PathBuf {
        if let Some(dir) = &self.save_dir {
            return dir.clone();
        }
        dirs::picture_dir()
            .map(|d| d.join("nationsense"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
