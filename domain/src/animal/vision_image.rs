//! Generated image value object

use crate::core::error::DomainError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// An image carried inline as base64 data with its declared mime type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionImage {
    mime_type: String,
    data: String,
}

impl VisionImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Parse a `data:<mime>;base64,<data>` URI
    pub fn from_data_uri(uri: &str) -> Result<Self, DomainError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| DomainError::InvalidDataUri("missing data: prefix".to_string()))?;
        let (header, data) = rest
            .split_once(',')
            .ok_or_else(|| DomainError::InvalidDataUri("missing payload separator".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| DomainError::InvalidDataUri("payload is not base64".to_string()))?;
        if data.is_empty() {
            return Err(DomainError::InvalidDataUri("payload is empty".to_string()));
        }
        Ok(Self::new(mime_type, data))
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the payload into raw image bytes
    pub fn decode(&self) -> Result<Vec<u8>, DomainError> {
        STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| DomainError::InvalidDataUri(e.to_string()))
    }

    /// Approximate decoded size in bytes
    pub fn byte_len(&self) -> usize {
        let padding = self.data.bytes().rev().take_while(|b| *b == b'=').count();
        (self.data.len() / 4 * 3).saturating_sub(padding)
    }

    /// File extension matching the mime type
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }
}
