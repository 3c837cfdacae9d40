// SPDX-License-Identifier: MPL-2.0
//! Displayable image references.

use super::ImageFormat;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

/// An opaque, displayable image reference.
///
/// Either a `data:` URI carrying the encoded bytes inline, or an `http(s)`
/// URL. The string is kept exactly as produced so results can be compared
/// with what the server returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

/// Where the bytes behind an [`ImageRef`] live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Bytes decoded from a `data:` URI.
    Inline(Vec<u8>),
    /// A remote location that has to be fetched.
    Remote(String),
}

impl ImageRef {
    /// Wraps a reference string without validating it.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Encodes raw image bytes as a base64 `data:` URI.
    #[must_use]
    pub fn from_bytes(format: ImageFormat, bytes: &[u8]) -> Self {
        Self(format!(
            "data:{};base64,{}",
            format.mime_type(),
            STANDARD.encode(bytes)
        ))
    }

    /// Returns the reference string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the reference into inline bytes or a remote URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] when the reference is neither a base64 data
    /// URI nor an `http(s)` URL, or when the base64 payload is invalid.
    pub fn resolve(&self) -> Result<ImageSource> {
        let reference = self.0.trim();

        if let Some(rest) = reference.strip_prefix("data:") {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| Error::Image("data URI has no payload".to_string()))?;
            if !header.ends_with(";base64") {
                return Err(Error::Image(
                    "data URI is not base64 encoded".to_string(),
                ));
            }
            let bytes = STANDARD
                .decode(payload.trim())
                .map_err(|e| Error::Image(e.to_string()))?;
            return Ok(ImageSource::Inline(bytes));
        }

        if reference.starts_with("http://") || reference.starts_with("https://") {
            return Ok(ImageSource::Remote(reference.to_string()));
        }

        Err(Error::Image(format!(
            "unrecognized image reference ({} chars)",
            reference.len()
        )))
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Data URIs can be megabytes long; only show the head.
        const MAX_SHOWN: usize = 48;
        if self.0.len() > MAX_SHOWN {
            let cut = (0..=MAX_SHOWN)
                .rev()
                .find(|i| self.0.is_char_boundary(*i))
                .unwrap_or(0);
            write!(f, "{}…", &self.0[..cut])
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<String> for ImageRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}
