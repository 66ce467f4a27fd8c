//! Use cases and view state owners
//!
//! Every asynchronous operation is described by an [`effects::Effect`]
//! carrying the generation it was issued under. [`effects::EffectRunner`]
//! executes it against the gateway and reports [`effects::Outcome`]s,
//! which [`view_controller::ViewController::apply`] accepts only while
//! their generation is still current.

pub mod chat;
pub mod effects;
pub mod insight;
pub mod search;
pub mod session_store;
pub mod view_controller;
pub mod vision;

#[cfg(test)]
pub(crate) mod testing;
