//! Non-interactive mode: look up one country and print one view

mod runner;

pub use runner::{OneShot, OneShotError};
