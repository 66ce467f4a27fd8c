//! Generation tags for stale-result suppression.
//!
//! Every asynchronous operation captures the current [`Generation`] when it
//! is issued. Before its result is applied, the owner compares the captured
//! tag against its counter and drops the result if a newer operation has
//! started since. The remote request itself is never cancelled.

use serde::{Deserialize, Serialize};

/// A monotonically increasing tag captured when an operation is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Single-owner counter producing [`Generation`] tags
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    current: u64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating every previously issued tag
    pub fn advance(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    /// The most recently issued generation
    pub fn current(&self) -> Generation {
        Generation(self.current)
    }

    /// Whether a result tagged with `generation` may still be applied
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }
}
