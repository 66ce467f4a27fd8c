//! Progress reporting for remote requests

pub mod reporter;
