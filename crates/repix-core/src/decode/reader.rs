//! Decoding encoded image bytes into raster buffers.

use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use thiserror::Error;

use crate::raster::{RasterError, RasterImage};

use super::exif::{apply_orientation, get_orientation};

/// Errors for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte stream is not a recognized image format.
    #[error("invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("corrupted or incomplete image data: {0}")]
    CorruptedFile(String),

    /// The decoded buffer is inconsistent with its own dimensions.
    #[error(transparent)]
    InvalidRaster(#[from] RasterError),
}

/// Decode encoded image bytes into a [`RasterImage`].
///
/// The format is sniffed from the byte stream, and EXIF orientation
/// correction is applied so the returned pixels are upright. Sources with
/// an alpha channel decode to `Rgba8`; everything else is converted to
/// `Rgb8`.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image format, or `DecodeError::CorruptedFile` if decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    // Orientation comes from the container metadata, so read it before
    // the pixel decode consumes the stream.
    let orientation = get_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(raster_from_dynamic(oriented)?)
}

/// Convert a decoded `DynamicImage` into a [`RasterImage`], preserving an
/// alpha channel when the source carries one.
fn raster_from_dynamic(img: DynamicImage) -> Result<RasterImage, RasterError> {
    if img.color().has_alpha() {
        RasterImage::from_rgba_image(img.into_rgba8())
    } else {
        RasterImage::from_rgb_image(img.into_rgb8())
    }
}
