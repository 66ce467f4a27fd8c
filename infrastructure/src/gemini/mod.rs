//! Gemini REST adapter
//!
//! Implements [`ModelGateway`](nationsense_application::ModelGateway) over
//! the Generative Language `v1beta` API.

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
pub mod sse;
