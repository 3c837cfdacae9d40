// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for previews and enhancement results.

use crate::domain::{ImageFormat, ImageRef};
use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Decoded pixels ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// A selected file, read and decoded.
///
/// Holds the original encoded bytes (uploaded as-is) next to the decoded
/// pixels and the data URI used as the result's "original" reference.
#[derive(Debug, Clone)]
pub struct Preview {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub bytes: Arc<Vec<u8>>,
    pub image: ImageRef,
    pub data: ImageData,
}

impl Preview {
    /// File name sent with the upload.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("image.{}", extension(self.format)))
    }
}

fn extension(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpg",
        ImageFormat::Png => "png",
    }
}

/// Decodes encoded bytes, guessing the container format from its magic bytes.
///
/// # Errors
///
/// Returns [`crate::error::Error::Image`] when the bytes are not a
/// supported image.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    Ok(to_image_data(&img))
}

/// Reads `path` and decodes it as `format`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read and
/// [`crate::error::Error::Image`] if its content does not decode as the
/// declared format.
pub fn load_preview(path: &Path, format: ImageFormat) -> Result<Preview> {
    let bytes = fs::read(path)?;
    let img = image_rs::load_from_memory_with_format(&bytes, codec(format))?;
    let data = to_image_data(&img);

    tracing::debug!(
        path = %path.display(),
        width = data.width,
        height = data.height,
        "preview decoded"
    );

    Ok(Preview {
        path: path.to_path_buf(),
        format,
        image: ImageRef::from_bytes(format, &bytes),
        bytes: Arc::new(bytes),
        data,
    })
}

fn codec(format: ImageFormat) -> image_rs::ImageFormat {
    match format {
        ImageFormat::Jpeg => image_rs::ImageFormat::Jpeg,
        ImageFormat::Png => image_rs::ImageFormat::Png,
    }
}

fn to_image_data(img: &image_rs::DynamicImage) -> ImageData {
    let (width, height) = img.dimensions();
    ImageData::from_rgba(width, height, img.to_rgba8().into_vec())
}
