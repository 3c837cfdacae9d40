// SPDX-License-Identifier: MPL-2.0
//! Enhancement request and result types.
//!
//! A request lives for exactly one call to the enhancement service. A result
//! is created once per finished enhancement (real or demo fallback), held in
//! memory for the session and replaced by the next one.

use crate::domain::image::{ImageFormat, ImageRef};
use std::sync::Arc;

/// Processing time shown for demo fallback results.
pub const DEMO_PROCESSING_TIME: &str = "2.3s";

/// Confidence shown for demo fallback results.
pub const DEMO_CONFIDENCE: f64 = 0.94;

/// One image upload.
#[derive(Debug, Clone)]
pub struct EnhancementRequest {
    pub file_name: String,
    pub format: ImageFormat,
    /// Raw file bytes, shared with the preview to avoid copying.
    pub bytes: Arc<Vec<u8>>,
}

impl EnhancementRequest {
    pub fn new(file_name: impl Into<String>, format: ImageFormat, bytes: Arc<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            format,
            bytes,
        }
    }
}

/// Display metadata attached to a result.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementMetadata {
    /// Server-provided display string, e.g. `"1.2s"`.
    pub processing_time: String,
    /// Fraction in `[0, 1]`.
    pub confidence: f64,
}

/// How a result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOrigin {
    Server,
    DemoFallback,
}

/// A finished enhancement, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementResult {
    pub original: ImageRef,
    pub enhanced: ImageRef,
    pub metadata: EnhancementMetadata,
    pub origin: ResultOrigin,
}

impl EnhancementResult {
    /// Builds a result from a successful server response.
    #[must_use]
    pub fn from_server(
        original: ImageRef,
        enhanced: ImageRef,
        processing_time: String,
        confidence: f64,
    ) -> Self {
        Self {
            original,
            enhanced,
            metadata: EnhancementMetadata {
                processing_time,
                confidence,
            },
            origin: ResultOrigin::Server,
        }
    }

    /// Builds the placeholder shown when the service could not be used:
    /// the preview stands in for both images.
    #[must_use]
    pub fn demo_fallback(preview: ImageRef) -> Self {
        Self {
            original: preview.clone(),
            enhanced: preview,
            metadata: EnhancementMetadata {
                processing_time: DEMO_PROCESSING_TIME.to_string(),
                confidence: DEMO_CONFIDENCE,
            },
            origin: ResultOrigin::DemoFallback,
        }
    }

    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.origin == ResultOrigin::DemoFallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_fallback_uses_preview_for_both_images() {
        let preview = ImageRef::from_bytes(ImageFormat::Png, b"preview");
        let result = EnhancementResult::demo_fallback(preview.clone());

        assert_eq!(result.original, preview);
        assert_eq!(result.enhanced, preview);
        assert_eq!(result.metadata.processing_time, "2.3s");
        assert!((result.metadata.confidence - 0.94).abs() < f64::EPSILON);
        assert!(result.is_demo());
    }

    #[test]
    fn server_result_keeps_references_verbatim() {
        let result = EnhancementResult::from_server(
            ImageRef::new("data:image/png;base64,AA=="),
            ImageRef::new("X"),
            "1.2s".to_string(),
            0.87,
        );

        assert_eq!(result.enhanced.as_str(), "X");
        assert_eq!(result.metadata.processing_time, "1.2s");
        assert!((result.metadata.confidence - 0.87).abs() < f64::EPSILON);
        assert!(!result.is_demo());
    }
}
