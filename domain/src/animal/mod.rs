//! Animal subdomain.
//!
//! - [`profile::AnimalProfile`]: the structured record about a nation's animal
//! - [`vision_image::VisionImage`]: a generated image carried as a data URI

pub mod profile;
pub mod vision_image;
