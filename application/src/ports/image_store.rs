//! Image store port
//!
//! Persists a generated vision image somewhere the user can find it.

use nationsense_domain::VisionImage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageStoreError {
    #[error("No vision to save")]
    NothingToSave,

    #[error("Could not save vision: {0}")]
    Failed(String),
}

pub trait ImageStore: Send + Sync {
    /// Save `image` for `animal_name`, returning where it was written
    fn save(&self, animal_name: &str, image: &VisionImage) -> Result<PathBuf, ImageStoreError>;
}
