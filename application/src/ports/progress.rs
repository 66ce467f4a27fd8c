//! Progress notification port
//!
//! Defines the interface for reporting progress of remote requests.

/// Callback for progress updates while a request is in flight
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a request starts
    fn on_request_start(&self, label: &str);

    /// Called when a request completes
    fn on_request_complete(&self, label: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _label: &str) {}
    fn on_request_complete(&self, _label: &str, _success: bool) {}
}
