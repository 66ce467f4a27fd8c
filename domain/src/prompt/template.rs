//! Prompt templates for the gateway operations

use serde_json::{Value, json};

/// Templates for generating prompts for each remote operation
pub struct PromptTemplate;

impl PromptTemplate {
    /// Structured profile lookup
    pub fn profile_query(country: &str) -> String {
        format!(
            r#"Identify the primary national animal or most culturally significant wildlife symbol of {}.
Return the result as a JSON object with the following fields:
- name (common name)
- scientificName
- description (a brief physical description, max 2 sentences)
- habitat (a few words about where it lives)
- traits (array of 3 strings identifying its key characteristics like 'Strength', 'Wisdom', etc.)"#,
            country
        )
    }

    /// JSON schema the profile lookup must answer with
    pub fn profile_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "scientificName": { "type": "STRING" },
                "description": { "type": "STRING" },
                "habitat": { "type": "STRING" },
                "traits": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["name", "description"]
        })
    }

    /// Free-text "sixth sense" narrative
    pub fn insight_query(country: &str, animal_name: &str) -> String {
        format!(
            r#"Reveal the "Sixth Sense" of the {animal} in the context of {country}.
Describe its spiritual meaning, folklore, or the deep, unspoken connection it represents for the nation's people.
Write it in a mystical, evocative, yet educational tone. Max 200 words."#,
            animal = animal_name,
            country = country
        )
    }

    /// Image generation
    pub fn vision_query(country: &str, animal_name: &str) -> String {
        format!(
            r#"A mystical, high-quality, artistic representation of a {animal}, representing the soul of {country}.
Cinematic lighting, ethereal atmosphere, highly detailed. Aspect ratio 1:1."#,
            animal = animal_name,
            country = country
        )
    }

    /// System instruction for the chat persona
    pub fn chat_persona(country: &str, animal_name: &str) -> String {
        format!(
            r#"You are the Spirit Guide of the {animal} from {country}.
Speak with wisdom, brevity, and a slightly mystical tone.
Your goal is to educate the user about your species, your habitat, and your connection to the nation's culture."#,
            animal = animal_name,
            country = country
        )
    }
}
