//! View mode value object

use serde::{Deserialize, Serialize};

/// Which view renders the current query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Factual profile
    #[default]
    Profile,
    /// "Sixth sense" cultural narrative
    Insight,
    /// Generated image
    Vision,
    /// Streamed conversation with the animal's persona
    Chat,
}

impl ViewMode {
    /// All views in navigation order
    pub const ALL: [ViewMode; 4] = [
        ViewMode::Profile,
        ViewMode::Insight,
        ViewMode::Vision,
        ViewMode::Chat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Profile => "profile",
            ViewMode::Insight => "insight",
            ViewMode::Vision => "vision",
            ViewMode::Chat => "chat",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Profile => "Reality",
            ViewMode::Insight => "Sixth Sense",
            ViewMode::Vision => "Vision",
            ViewMode::Chat => "Commune",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ViewMode::Profile => 0,
            ViewMode::Insight => 1,
            ViewMode::Vision => 2,
            ViewMode::Chat => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "profile" | "reality" | "explore" => Ok(ViewMode::Profile),
            "insight" | "sense" | "sixth-sense" => Ok(ViewMode::Insight),
            "vision" | "image" => Ok(ViewMode::Vision),
            "chat" | "commune" => Ok(ViewMode::Chat),
            _ => Err(format!(
                "Invalid view: {}. Valid options: profile, insight, vision, chat",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_profile() {
        assert_eq!(ViewMode::default(), ViewMode::Profile);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(ViewMode::Profile.next(), ViewMode::Insight);
        assert_eq!(ViewMode::Chat.next(), ViewMode::Profile);
        assert_eq!(ViewMode::Profile.prev(), ViewMode::Chat);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("CHAT".parse::<ViewMode>().unwrap(), ViewMode::Chat);
        assert_eq!("sense".parse::<ViewMode>().unwrap(), ViewMode::Insight);
        assert!("map".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_index_round_trip() {
        for view in ViewMode::ALL {
            assert_eq!(ViewMode::from_index(view.index()), Some(view));
        }
        assert_eq!(ViewMode::from_index(4), None);
    }
}
