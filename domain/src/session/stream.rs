//! Chat reply stream events

/// One event of a streamed chat reply.
///
/// Produced by a chat session from SSE frames and consumed in order by the
/// chat flow. Ends with `Completed` or `Error`, or with the producer
/// going away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Next slice of reply text
    Delta(String),
    /// Whole reply text; no further events follow
    Completed(String),
    /// Transport or model failure; no further events follow
    Error(String),
}
