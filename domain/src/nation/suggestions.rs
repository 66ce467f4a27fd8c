//! Countries offered before the first search

/// Suggested countries shown while no search has been made
pub const INITIAL_SUGGESTIONS: [&str; 8] = [
    "India",
    "United States",
    "China",
    "Brazil",
    "Australia",
    "Egypt",
    "Japan",
    "Kenya",
];
