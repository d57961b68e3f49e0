//! Synthetic image fixtures for exercising face-analysis endpoints.
//!
//! Fixtures are flat single-color bitmaps. They carry no faces, which makes
//! them useful for checking that an endpoint answers at all without depending
//! on real photographs.

pub mod color;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{Rgb, RgbImage, codecs::jpeg::JpegEncoder};
use thiserror::Error;

pub use color::NamedColor;

/// Edge length used when no explicit size is requested.
pub const DEFAULT_SIZE: (u32, u32) = (200, 200);

/// MIME type of every generated fixture.
pub const JPEG_MIME: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("unknown color name `{0}`")]
    UnknownColor(String),
    #[error("fixture dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Fill a `width` x `height` bitmap with a single color.
pub fn solid_image(color: NamedColor, width: u32, height: u32) -> Result<RgbImage> {
    if width == 0 || height == 0 {
        return Err(FixtureError::EmptyImage { width, height });
    }
    Ok(RgbImage::from_pixel(width, height, Rgb(color.rgb())))
}

/// Encode an RGB bitmap as JPEG.
pub fn encode_jpeg(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    JpegEncoder::new(&mut buf).encode_image(img)?;
    Ok(buf)
}

/// Wrap raw bytes as a `data:<mime>;base64,<payload>` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Build a JPEG data URI for a flat image of the named color.
///
/// `size` defaults to [`DEFAULT_SIZE`].
pub fn create_test_image(color: &str, size: Option<(u32, u32)>) -> Result<String> {
    let color: NamedColor = color.parse()?;
    let (width, height) = size.unwrap_or(DEFAULT_SIZE);
    let img = solid_image(color, width, height)?;
    let jpeg = encode_jpeg(&img)?;
    Ok(data_uri(JPEG_MIME, &jpeg))
}
