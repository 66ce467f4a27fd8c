//! Writes decoded vision images to disk as
//! `spirit-<animal-slug>-<timestamp>.<ext>`.

use chrono::{DateTime, Local};
use nationsense_application::{ImageStore, ImageStoreError};
use nationsense_domain::{DomainError, VisionImage};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum VisionSaveError {
    #[error("Could not decode image: {0}")]
    Decode(#[from] DomainError),

    #[error("Could not write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Lowercase ASCII slug; runs of other characters collapse to one `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "animal".to_string()
    } else {
        slug.to_string()
    }
}

pub struct VisionFileStore {
    dir: PathBuf,
}

impl VisionFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save with the current local time in the file name
    pub fn save(&self, animal_name: &str, image: &VisionImage) -> Result<PathBuf, VisionSaveError> {
        self.save_at(animal_name, image, Local::now())
    }

    pub fn save_at(
        &self,
        animal_name: &str,
        image: &VisionImage,
        at: DateTime<Local>,
    ) -> Result<PathBuf, VisionSaveError> {
        let bytes = image.decode()?;
        fs::create_dir_all(&self.dir)?;

        let file_name = format!(
            "spirit-{}-{}.{}",
            slugify(animal_name),
            at.format("%Y%m%d-%H%M%S"),
            image.file_extension()
        );
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;

        info!("Saved vision to {}", path.display());
        Ok(path)
    }
}

impl ImageStore for VisionFileStore {
    fn save(&self, animal_name: &str, image: &VisionImage) -> Result<PathBuf, ImageStoreError> {
        VisionFileStore::save(self, animal_name, image)
            .map_err(|e| ImageStoreError::Failed(e.to_string()))
    }
}
