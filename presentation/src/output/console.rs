//! Console output formatter for one-shot lookups

use colored::Colorize;
use nationsense_application::{InsightState, ViewController};
use nationsense_domain::{
    AnimalProfile, ChatRole, QueryPhase, Transcript, ViewMode, VisionImage, messages,
};
use serde_json::json;

/// Formats view state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format whatever the active view shows
    pub fn format(controller: &ViewController) -> String {
        let query = controller.query();
        match query.phase() {
            QueryPhase::Empty => format!("{}\n", "Name a nation to begin.".dimmed()),
            QueryPhase::Loading => format!("{}\n", messages::CONSULTING.yellow()),
            QueryPhase::Error => Self::error(query.error().unwrap_or_default()),
            QueryPhase::Ready => {
                let Some(profile) = query.animal() else {
                    return String::new();
                };
                match controller.view() {
                    ViewMode::Profile => Self::profile(query.country(), profile),
                    ViewMode::Insight => Self::insight(profile, controller.insight().state()),
                    ViewMode::Vision => Self::vision(
                        profile,
                        controller.vision().image(),
                        controller.vision().error(),
                    ),
                    ViewMode::Chat => Self::transcript(profile, controller.chat().transcript()),
                }
            }
        }
    }

    /// Format an animal profile
    pub fn profile(country: &str, profile: &AnimalProfile) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("National animal of {}", country)));
        output.push('\n');
        output.push_str(&format!("\n{}\n", profile.name().bold()));
        if let Some(scientific) = profile.scientific_name() {
            output.push_str(&format!("{}\n", scientific.italic().dimmed()));
        }
        if let Some(habitat) = profile.habitat() {
            output.push_str(&format!("\n{} {}\n", "Habitat:".cyan().bold(), habitat));
        }
        output.push_str(&format!("\n{}\n", profile.description()));

        if !profile.traits().is_empty() {
            output.push_str(&format!("\n{}\n", "Traits:".cyan().bold()));
            for t in profile.traits() {
                output.push_str(&format!("  * {}\n", t));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn insight(profile: &AnimalProfile, state: &InsightState) -> String {
        let mut output = Self::section_header(&format!("Sixth Sense: {}", profile.name()));
        match state {
            InsightState::Idle | InsightState::Fetching => {
                output.push_str(&format!("\n{}\n", "Consulting the spirits...".yellow()));
            }
            InsightState::Shown(text) => {
                output.push_str(&format!("\n{}\n", text));
            }
            InsightState::Degraded(text) => {
                output.push_str(&format!("\n{}\n", text.dimmed()));
            }
        }
        output
    }

    pub fn vision(
        profile: &AnimalProfile,
        image: Option<&VisionImage>,
        error: Option<&str>,
    ) -> String {
        let mut output = Self::section_header(&format!("Vision: {}", profile.name()));
        match (image, error) {
            (Some(image), _) => {
                output.push_str(&format!(
                    "\n{} {} ({} bytes)\n",
                    "Manifested:".green().bold(),
                    image.mime_type(),
                    image.byte_len()
                ));
            }
            (None, Some(error)) => output.push_str(&format!("\n{}\n", error.red())),
            (None, None) => {
                output.push_str(&format!("\n{}\n", "No vision has been summoned.".dimmed()))
            }
        }
        output
    }

    /// Format a chat transcript
    pub fn transcript(profile: &AnimalProfile, transcript: &Transcript) -> String {
        let mut output = Self::section_header(&format!("Commune: {}", profile.name()));
        for message in transcript.messages() {
            output.push_str(&Self::chat_line(profile.name(), message.role(), message.text()));
        }
        output
    }

    /// One transcript entry
    pub fn chat_line(animal_name: &str, role: ChatRole, text: &str) -> String {
        match role {
            ChatRole::User => format!("\n{} {}\n", "You:".cyan().bold(), text),
            ChatRole::Model => format!("\n{} {}\n", format!("{}:", animal_name).yellow().bold(), text),
        }
    }

    pub fn error(message: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), message)
    }

    /// Format as JSON
    pub fn format_json(controller: &ViewController) -> String {
        let query = controller.query();
        let insight = controller.insight().state().text();
        let vision = controller.vision().image().map(|image| {
            json!({
                "mimeType": image.mime_type(),
                "bytes": image.byte_len(),
            })
        });
        let value = json!({
            "country": query.country(),
            "phase": query.phase().as_str(),
            "view": controller.view().as_str(),
            "error": query.error(),
            "animal": query.animal(),
            "insight": insight,
            "vision": vision,
            "transcript": controller.chat().transcript().messages(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubGateway;
    use nationsense_application::EffectRunner;
    use std::sync::Arc;

    fn crane() -> AnimalProfile {
        AnimalProfile::new("Red-crowned Crane", "A tall white crane.")
            .unwrap()
            .with_scientific_name("Grus japonensis")
            .with_habitat("Wetlands of Hokkaido")
            .with_traits(["Longevity", "Fidelity", "Grace"])
    }

    #[test]
    fn test_profile_lists_every_field() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::profile("Japan", &crane());
        assert!(text.contains("National animal of Japan"));
        assert!(text.contains("Red-crowned Crane"));
        assert!(text.contains("Grus japonensis"));
        assert!(text.contains("Habitat: Wetlands of Hokkaido"));

        let traits: Vec<&str> = text.lines().filter(|line| line.starts_with("  * ")).collect();
        assert_eq!(traits, ["  * Longevity", "  * Fidelity", "  * Grace"]);
    }

    #[test]
    fn test_empty_controller() {
        colored::control::set_override(false);
        let controller = ViewController::new();
        assert!(ConsoleFormatter::format(&controller).contains("Name a nation"));
    }

    #[test]
    fn test_loading_controller() {
        colored::control::set_override(false);
        let mut controller = ViewController::new();
        controller.submit_search("Japan");
        assert!(ConsoleFormatter::format(&controller).contains("CONSULTING"));
    }

    #[test]
    fn test_transcript_labels_speakers() {
        colored::control::set_override(false);
        let mut transcript = Transcript::new();
        transcript.push_model("I am the spirit.");
        transcript.push_user("Hello");
        let text = ConsoleFormatter::transcript(&crane(), &transcript);
        assert!(text.contains("Red-crowned Crane: I am the spirit."));
        assert!(text.contains("You: Hello"));
    }

    #[test]
    fn test_json_is_valid() {
        let mut controller = ViewController::new();
        controller.submit_search("Japan");
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&controller)).unwrap();
        assert_eq!(value["country"], "Japan");
        assert_eq!(value["phase"], "loading");
        assert_eq!(value["view"], "profile");
        assert!(value["animal"].is_null());
    }

    #[tokio::test]
    async fn test_json_omits_image_after_vision_reset() {
        let runner = EffectRunner::new(Arc::new(StubGateway::default()));
        let mut controller = ViewController::new();
        let effect = controller.submit_search("Japan").unwrap();
        controller.run(&runner, effect).await;
        let effect = controller.generate_vision().unwrap().unwrap();
        controller.run(&runner, effect).await;

        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&controller)).unwrap();
        assert!(value["animal"]["imageUrl"].is_string());

        controller.reset_vision();
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&controller)).unwrap();
        assert!(value["vision"].is_null());
        assert!(value["animal"].get("imageUrl").is_none());
    }
}
