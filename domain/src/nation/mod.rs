//! Nation search subdomain.
//!
//! - [`query::NationQuery`]: the single search state and its transitions
//! - [`view_mode::ViewMode`]: which renderer consumes the query
//! - [`suggestions::INITIAL_SUGGESTIONS`]: countries offered on an empty screen

pub mod query;
pub mod suggestions;
pub mod view_mode;
