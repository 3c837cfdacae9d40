// SPDX-License-Identifier: MPL-2.0
//! Domain types for the enhancement workflow.
//!
//! This module has no dependency on Iced or the HTTP stack.
//!
//! - [`image`]: accepted upload formats and displayable image references
//! - [`enhancement`]: the upload request and the session's result

pub mod enhancement;
pub mod image;

pub use enhancement::{
    EnhancementMetadata, EnhancementRequest, EnhancementResult, ResultOrigin, DEMO_CONFIDENCE,
    DEMO_PROCESSING_TIME,
};
pub use image::{ImageFormat, ImageRef, ImageSource};
