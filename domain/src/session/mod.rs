//! Model session domain: events of a streamed chat reply

pub mod stream;
