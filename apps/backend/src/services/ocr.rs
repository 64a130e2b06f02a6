//! OCR collaborator contract and upload checks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// File extensions the upload endpoints advertise.
pub const SUPPORTED_IMAGE_TYPES: [&str; 5] = [".jpg", ".jpeg", ".png", ".bmp", ".tiff"];

/// Outcome reported by an OCR engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrOutput {
    pub success: bool,
    pub extracted_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OcrOutput {
    pub fn recognized(text: impl Into<String>) -> Self {
        Self {
            success: true,
            extracted_text: text.into(),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            extracted_text: String::new(),
            error: Some(error.into()),
        }
    }

    /// The recognized text, or an upstream error when the engine failed.
    pub fn into_text(self) -> Result<String> {
        if self.success {
            Ok(self.extracted_text)
        } else {
            let reason = self.error.unwrap_or_else(|| "Unknown error".to_string());
            Err(ApiError::Upstream(format!("OCR processing failed: {}", reason)))
        }
    }
}

/// Image-to-text engine.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> OcrOutput;
}

/// Reject uploads that are not images, are empty, or exceed `max_bytes`.
pub fn validate_upload(content_type: Option<&str>, len: usize, max_bytes: usize) -> Result<()> {
    if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
        return Err(ApiError::BadRequest(
            "Invalid file type. Please upload an image file (JPEG, PNG, BMP, TIFF).".to_string(),
        ));
    }
    if len > max_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "File too large. Maximum size is {} bytes.",
            max_bytes
        )));
    }
    if len == 0 {
        return Err(ApiError::BadRequest("Empty file uploaded.".to_string()));
    }
    Ok(())
}
