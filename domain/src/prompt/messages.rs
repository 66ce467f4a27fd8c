//! Fixed user-facing texts

/// Shown when a profile lookup fails
pub const NATION_NOT_FOUND: &str =
    "Could not locate that nation in the spiritual archives. Please try again.";

/// Shown when no API credential is configured
pub const ARCHIVES_SEALED: &str = "The archives are sealed: no API key is configured.";

/// Shown while a profile lookup is in flight
pub const CONSULTING: &str = "CONSULTING THE ARCHIVES...";

/// Insight text when the model answers with nothing
pub const SPIRITS_SILENT: &str = "The spirits are silent.";

/// Insight text when the insight request fails
pub const ARCHIVES_UNREACHABLE: &str = "Could not commune with the archives at this time.";

/// Shown when image generation fails
pub const VISION_FAILED: &str = "The vision could not be manifested. The ethereal plane is busy.";

/// Appended to the transcript when a chat send fails
pub const CONNECTION_SEVERED: &str = "The connection has been severed.";

/// Locally constructed first message of every chat session
pub fn chat_greeting(animal_name: &str, country: &str) -> String {
    format!(
        "I am the spirit of the {}. Ask me about my life in {}, or my hidden connection to the land.",
        animal_name, country
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_mentions_animal_and_country() {
        let greeting = chat_greeting("Red-crowned Crane", "Japan");
        assert!(greeting.contains("Red-crowned Crane"));
        assert!(greeting.contains("Japan"));
    }
}
