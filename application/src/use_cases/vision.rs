//! Vision view logic
//!
//! Generation is user-initiated only. A reset drops the held image and
//! invalidates any generation still in flight.

use crate::ports::model_gateway::GatewayError;
use nationsense_domain::{Generation, GenerationCounter, VisionImage, messages};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisionStatus {
    #[default]
    Idle,
    Generating,
}

/// An image generation issued by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionTicket {
    pub generation: Generation,
    pub country: String,
    pub animal_name: String,
}

/// Local state of the vision view
#[derive(Debug, Default)]
pub struct VisionPanel {
    status: VisionStatus,
    image: Option<VisionImage>,
    error: Option<String>,
    generations: GenerationCounter,
}

impl VisionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> VisionStatus {
        self.status
    }

    pub fn is_generating(&self) -> bool {
        self.status == VisionStatus::Generating
    }

    pub fn image(&self) -> Option<&VisionImage> {
        self.image.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a generation. Returns None while one is already running.
    pub fn begin(&mut self, country: &str, animal_name: &str) -> Option<VisionTicket> {
        if self.is_generating() {
            return None;
        }
        self.status = VisionStatus::Generating;
        self.error = None;
        Some(VisionTicket {
            generation: self.generations.advance(),
            country: country.to_string(),
            animal_name: animal_name.to_string(),
        })
    }

    /// Apply a generation result. Returns the data URI to attach to the
    /// profile on success.
    pub fn resolve(
        &mut self,
        generation: Generation,
        result: Result<String, GatewayError>,
    ) -> Option<String> {
        if !self.generations.is_current(generation) {
            debug!("Discarding stale vision {}", generation);
            return None;
        }
        self.status = VisionStatus::Idle;

        let parsed = result.and_then(|uri| VisionImage::from_data_uri(&uri).map_err(Into::into));
        match parsed {
            Ok(image) => {
                let uri = image.to_data_uri();
                self.image = Some(image);
                self.error = None;
                Some(uri)
            }
            Err(e) => {
                warn!("Vision generation failed: {}", e);
                self.error = Some(e.user_message(messages::VISION_FAILED).to_string());
                None
            }
        }
    }

    /// Clear the held image and return to the idle display without fetching
    pub fn reset(&mut self) {
        self.generations.advance();
        self.status = VisionStatus::Idle;
        self.image = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: &str = "data:image/png;base64,aGVsbG8=";

    #[test]
    fn test_generate_success() {
        let mut panel = VisionPanel::new();
        let ticket = panel.begin("Japan", "Red-crowned Crane").unwrap();
        assert!(panel.is_generating());

        let attach = panel.resolve(ticket.generation, Ok(IMAGE.to_string()));
        assert_eq!(attach.as_deref(), Some(IMAGE));
        assert_eq!(panel.status(), VisionStatus::Idle);
        assert_eq!(panel.image().unwrap().mime_type(), "image/png");
    }

    #[test]
    fn test_no_concurrent_generation() {
        let mut panel = VisionPanel::new();
        assert!(panel.begin("Japan", "Crane").is_some());
        assert!(panel.begin("Japan", "Crane").is_none());
    }

    #[test]
    fn test_failure_keeps_retry_available() {
        let mut panel = VisionPanel::new();
        let ticket = panel.begin("Japan", "Crane").unwrap();
        assert!(panel.resolve(ticket.generation, Err(GatewayError::NoImage)).is_none());
        assert_eq!(panel.error(), Some(messages::VISION_FAILED));
        assert_eq!(panel.status(), VisionStatus::Idle);

        assert!(panel.begin("Japan", "Crane").is_some());
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_malformed_data_uri_is_an_error() {
        let mut panel = VisionPanel::new();
        let ticket = panel.begin("Japan", "Crane").unwrap();
        assert!(
            panel
                .resolve(ticket.generation, Ok("not a uri".to_string()))
                .is_none()
        );
        assert_eq!(panel.error(), Some(messages::VISION_FAILED));
    }

    #[test]
    fn test_reset_discards_in_flight_result() {
        let mut panel = VisionPanel::new();
        let ticket = panel.begin("Japan", "Crane").unwrap();
        panel.reset();

        assert!(panel.resolve(ticket.generation, Ok(IMAGE.to_string())).is_none());
        assert!(panel.image().is_none());
        assert_eq!(panel.status(), VisionStatus::Idle);
    }

    #[test]
    fn test_reset_clears_image() {
        let mut panel = VisionPanel::new();
        let ticket = panel.begin("Japan", "Crane").unwrap();
        panel.resolve(ticket.generation, Ok(IMAGE.to_string()));
        panel.reset();
        assert!(panel.image().is_none());
        assert!(panel.error().is_none());
    }
}
