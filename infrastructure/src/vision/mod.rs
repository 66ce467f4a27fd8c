//! Local storage for generated vision images

mod store;

pub use store::{VisionFileStore, VisionSaveError, slugify};
