//! Port definitions (interfaces for external adapters)
//!
//! Ports define the boundaries between the application layer and
//! external systems. Infrastructure adapters implement these traits.

pub mod image_store;
pub mod model_gateway;
pub mod progress;
