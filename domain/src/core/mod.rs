//! Core domain concepts shared across all subdomains.
//!
//! - [`country::Country`]: a validated country name to search for
//! - [`generation::GenerationCounter`]: stale-result detection
//! - [`error::DomainError`]: domain-level errors

pub mod country;
pub mod error;
pub mod generation;
