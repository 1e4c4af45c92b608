//! Baseline JPEG encoding via the `image` crate's encoder.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use crate::quality::Quality;
use crate::raster::{PixelFormat, RasterImage};

use super::{BlobFormat, EncodeError, EncodedBlob};

/// Encode a raster image to JPEG bytes at the given quality.
///
/// The quality level parameterizes the encoder's quantization trade-off:
/// higher quality means larger output and higher fidelity. Encoding 100 is
/// permitted here; callers wanting the "skip at 100" policy check
/// [`Quality::should_compress`] first.
///
/// RGBA input is flattened to RGB before encoding, since JPEG carries no
/// alpha channel.
///
/// Dimension and buffer-length preconditions are enforced at
/// [`RasterImage`] construction, so every image reaching this function is
/// already valid.
///
/// # Errors
///
/// Returns `EncodeError::EncodingFailed` if the underlying codec rejects
/// the input. On failure no output is produced.
///
/// # Quality Guidelines
///
/// * 90-100: high quality, suitable for archival
/// * 80-90: good quality, recommended for most uses
/// * 60-80: medium quality, acceptable for web/social media
/// * Below 60: low quality, visible artifacts
pub fn encode_jpeg(image: &RasterImage, quality: Quality) -> Result<EncodedBlob, EncodeError> {
    // The image crate's JPEG encoder requires quality >= 1; 0 is a valid
    // level in our contract, so floor it at the codec boundary only.
    let codec_quality = quality.get().max(1);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, codec_quality);

    match image.format() {
        PixelFormat::Rgb8 => encoder
            .write_image(
                image.pixels(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?,
        PixelFormat::Rgba8 => {
            let rgb = flatten_alpha(image.pixels());
            encoder
                .write_image(
                    &rgb,
                    image.width(),
                    image.height(),
                    ExtendedColorType::Rgb8,
                )
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }
    }

    Ok(EncodedBlob::new(BlobFormat::Jpeg, buffer.into_inner()))
}

/// Drop the alpha channel from an RGBA buffer.
fn flatten_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[0..3]);
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
