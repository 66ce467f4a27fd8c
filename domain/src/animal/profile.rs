//! Animal profile entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The structured record describing a nation's animal (Entity)
///
/// Created from the model's structured output. After creation only
/// `cultural_significance` and `image_url` may be attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProfilePayload")]
pub struct AnimalProfile {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scientific_name: Option<String>,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    habitat: Option<String>,
    traits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cultural_significance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
}

/// Raw shape of the structured output, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePayload {
    name: Option<String>,
    scientific_name: Option<String>,
    description: Option<String>,
    habitat: Option<String>,
    traits: Option<Vec<String>>,
    cultural_significance: Option<String>,
    image_url: Option<String>,
}

impl AnimalProfile {
    /// Create a profile with the two required fields
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = required("name", Some(name.into()))?;
        let description = required("description", Some(description.into()))?;
        Ok(Self {
            name,
            scientific_name: None,
            description,
            habitat: None,
            traits: Vec::new(),
            cultural_significance: None,
            image_url: None,
        })
    }

    /// Parse and validate the model's JSON text
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let payload: ProfilePayload = serde_json::from_str(text.trim())
            .map_err(|e| DomainError::InvalidProfile(e.to_string()))?;
        Self::try_from(payload)
    }

    pub fn with_scientific_name(mut self, scientific_name: impl Into<String>) -> Self {
        self.scientific_name = optional(Some(scientific_name.into()));
        self
    }

    pub fn with_habitat(mut self, habitat: impl Into<String>) -> Self {
        self.habitat = optional(Some(habitat.into()));
        self
    }

    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traits = normalize_traits(traits.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cultural_significance(mut self, insight: impl Into<String>) -> Self {
        self.attach_cultural_significance(insight);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scientific_name(&self) -> Option<&str> {
        self.scientific_name.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn habitat(&self) -> Option<&str> {
        self.habitat.as_deref()
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    pub fn cultural_significance(&self) -> Option<&str> {
        self.cultural_significance.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Attach a later-fetched insight. Blank text is ignored.
    pub fn attach_cultural_significance(&mut self, insight: impl Into<String>) {
        if let Some(insight) = optional(Some(insight.into())) {
            self.cultural_significance = Some(insight);
        }
    }

    /// Attach a later-generated image (data URI or remote URL). Blank text is ignored.
    pub fn attach_image_url(&mut self, url: impl Into<String>) {
        if let Some(url) = optional(Some(url.into())) {
            self.image_url = Some(url);
        }
    }

    pub fn detach_image_url(&mut self) {
        self.image_url = None;
    }
}

impl TryFrom<ProfilePayload> for AnimalProfile {
    type Error = DomainError;

    fn try_from(payload: ProfilePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", payload.name)?,
            scientific_name: optional(payload.scientific_name),
            description: required("description", payload.description)?,
            habitat: optional(payload.habitat),
            traits: normalize_traits(payload.traits.unwrap_or_default()),
            cultural_significance: optional(payload.cultural_significance),
            image_url: optional(payload.image_url),
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, DomainError> {
    optional(value).ok_or_else(|| DomainError::InvalidProfile(format!("{} is empty", field)))
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trim entries and drop blank ones. The count is left as the model returned it.
fn normalize_traits(traits: Vec<String>) -> Vec<String> {
    traits
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRANE_JSON: &str = r#"{
        "name": "Red-crowned Crane",
        "scientificName": "Grus japonensis",
        "description": "A tall white crane with a red crown.",
        "habitat": "Marshes of Hokkaido",
        "traits": ["Longevity", "Fidelity", "Grace"]
    }"#;

    #[test]
    fn test_from_json_full_profile() {
        let profile = AnimalProfile::from_json(CRANE_JSON).unwrap();
        assert_eq!(profile.name(), "Red-crowned Crane");
        assert_eq!(profile.scientific_name(), Some("Grus japonensis"));
        assert_eq!(profile.habitat(), Some("Marshes of Hokkaido"));
        assert_eq!(profile.traits(), ["Longevity", "Fidelity", "Grace"]);
        assert!(profile.cultural_significance().is_none());
        assert!(profile.image_url().is_none());
    }

    #[test]
    fn test_from_json_optional_fields_missing() {
        let profile =
            AnimalProfile::from_json(r#"{"name": "Lion", "description": "Big cat."}"#).unwrap();
        assert!(profile.scientific_name().is_none());
        assert!(profile.habitat().is_none());
        assert!(profile.traits().is_empty());
    }

    #[test]
    fn test_from_json_rejects_empty_name() {
        let err = AnimalProfile::from_json(r#"{"name": "  ", "description": "x"}"#).unwrap_err();
        assert_eq!(err, DomainError::InvalidProfile("name is empty".to_string()));
    }

    #[test]
    fn test_from_json_rejects_missing_description() {
        let err = AnimalProfile::from_json(r#"{"name": "Lion"}"#).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidProfile("description is empty".to_string())
        );
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(AnimalProfile::from_json("not json").is_err());
        assert!(AnimalProfile::from_json("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_trait_count_is_not_enforced() {
        let profile = AnimalProfile::new("Kiwi", "Flightless bird.")
            .unwrap()
            .with_traits(["Shy", " ", "Nocturnal", "Curious", "Resilient "]);
        assert_eq!(profile.traits(), ["Shy", "Nocturnal", "Curious", "Resilient"]);
    }

    #[test]
    fn test_attach_cultural_significance() {
        let mut profile = AnimalProfile::new("Kiwi", "Flightless bird.").unwrap();
        profile.attach_cultural_significance("   ");
        assert!(profile.cultural_significance().is_none());
        profile.attach_cultural_significance("A taonga of Aotearoa.");
        assert_eq!(profile.cultural_significance(), Some("A taonga of Aotearoa."));
    }

    #[test]
    fn test_serializes_camel_case() {
        let profile = AnimalProfile::new("Kiwi", "Flightless bird.")
            .unwrap()
            .with_scientific_name("Apteryx")
            .with_cultural_significance("Sacred.");
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["scientificName"], "Apteryx");
        assert_eq!(json["culturalSignificance"], "Sacred.");
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_deserialize_validates_required_fields() {
        let err = serde_json::from_str::<AnimalProfile>(r#"{"name": " ", "description": "x"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("name is empty"));

        let profile: AnimalProfile = serde_json::from_str(CRANE_JSON).unwrap();
        assert_eq!(profile, AnimalProfile::from_json(CRANE_JSON).unwrap());
    }

    #[test]
    fn test_detach_image_url() {
        let mut profile = AnimalProfile::new("Kiwi", "Flightless bird.").unwrap();
        profile.attach_image_url("data:image/png;base64,AAAA");
        profile.detach_image_url();
        assert!(profile.image_url().is_none());
    }
}
