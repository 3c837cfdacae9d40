// SPDX-License-Identifier: MPL-2.0
//! Image format and image reference types.
//!
//! These types describe images the way the enhancement workflow sees them:
//! a declared format for uploads, and an opaque displayable reference
//! (data URI or URL) for previews and results.

mod reference;

pub use reference::{ImageRef, ImageSource};

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

/// File extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

impl ImageFormat {
    /// Returns the MIME type sent with the multipart upload.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Parses a declared type, either a MIME type (`image/jpeg`, `image/jpg`,
    /// `image/png`) or a bare extension (`jpg`, `jpeg`, `png`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for anything else.
    pub fn from_declared_type(declared: &str) -> Result<Self> {
        let normalized = declared.trim().to_ascii_lowercase();
        let subtype = normalized.strip_prefix("image/").unwrap_or(&normalized);
        match subtype {
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            _ => Err(Error::UnsupportedFormat(declared.to_string())),
        }
    }

    /// Derives the declared type of a file from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] when the extension is missing or
    /// not one of the accepted ones.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
        Self::from_declared_type(extension)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn accepts_jpeg_jpg_and_png_mime_types() {
        assert_eq!(
            ImageFormat::from_declared_type("image/jpeg").unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFormat::from_declared_type("image/jpg").unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFormat::from_declared_type("image/png").unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn accepts_extensions_case_insensitively() {
        assert_eq!(
            ImageFormat::from_declared_type("JPG").unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFormat::from_declared_type("Png").unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn rejects_other_types() {
        for declared in ["image/gif", "image/webp", "text/plain", "tiff", "", "image/"] {
            assert!(
                matches!(
                    ImageFormat::from_declared_type(declared),
                    Err(Error::UnsupportedFormat(_))
                ),
                "{declared} should be rejected"
            );
        }
    }

    #[test]
    fn from_path_uses_extension() {
        let path = PathBuf::from("/tmp/reef.JPEG");
        assert_eq!(ImageFormat::from_path(&path).unwrap(), ImageFormat::Jpeg);

        let no_ext = PathBuf::from("/tmp/reef");
        assert!(ImageFormat::from_path(&no_ext).is_err());
    }

    #[test]
    fn mime_types_are_canonical() {
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageFormat::Png.to_string(), "image/png");
    }
}
