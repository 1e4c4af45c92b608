//! Encoding raster images into compressed blobs.
//!
//! The encoder adapter wraps the `image` crate's baseline JPEG codec: given
//! a validated [`RasterImage`](crate::raster::RasterImage) and a
//! [`Quality`](crate::quality::Quality), it produces an [`EncodedBlob`]
//! decodable back to the same pixel dimensions. Failure is all-or-nothing -
//! no partial blob ever escapes.
//!
//! Host runtimes integrate through the [`Compressor`] capability trait
//! rather than the codec directly; [`JpegCompressor`] is the provided
//! implementation.

mod jpeg;

pub use jpeg::encode_jpeg;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quality::Quality;
use crate::raster::RasterImage;

/// Errors that can occur while encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The underlying codec could not produce output.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}

/// Declared format of an encoded blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlobFormat {
    /// Baseline JPEG.
    Jpeg,
}

impl BlobFormat {
    /// Canonical lowercase name of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            BlobFormat::Jpeg => "jpeg",
        }
    }

    /// MIME type for the format.
    pub fn mime_type(self) -> &'static str {
        match self {
            BlobFormat::Jpeg => "image/jpeg",
        }
    }
}

/// An immutable encoded byte sequence with its declared format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlob {
    format: BlobFormat,
    bytes: Vec<u8>,
}

impl EncodedBlob {
    pub(crate) fn new(format: BlobFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    /// Declared format of the encoded bytes.
    pub fn format(&self) -> BlobFormat {
        self.format
    }

    /// The encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the encoded bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the blob is empty (never true for a successful encode).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the blob and return the bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Capability interface for hosts: the compress/no-compress policy plus the
/// encode operation, independent of any particular codec.
pub trait Compressor {
    /// Whether the given quality level warrants re-encoding.
    fn should_compress(&self, quality: Quality) -> bool;

    /// Encode the image at the given quality.
    fn compress(&self, image: &RasterImage, quality: Quality) -> Result<EncodedBlob, EncodeError>;
}

/// The default [`Compressor`] backed by baseline JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCompressor;

impl Compressor for JpegCompressor {
    fn should_compress(&self, quality: Quality) -> bool {
        quality.should_compress()
    }

    fn compress(&self, image: &RasterImage, quality: Quality) -> Result<EncodedBlob, EncodeError> {
        encode_jpeg(image, quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelFormat;

    #[test]
    fn test_blob_format_names() {
        assert_eq!(BlobFormat::Jpeg.as_str(), "jpeg");
        assert_eq!(BlobFormat::Jpeg.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_jpeg_compressor_policy_delegates() {
        let compressor = JpegCompressor;
        assert!(compressor.should_compress(Quality::new(80).unwrap()));
        assert!(!compressor.should_compress(Quality::FULL));
    }

    #[test]
    fn test_jpeg_compressor_compresses() {
        let image =
            RasterImage::new(8, 8, PixelFormat::Rgb8, vec![128u8; 8 * 8 * 3]).unwrap();
        let blob = JpegCompressor
            .compress(&image, Quality::new(90).unwrap())
            .unwrap();

        assert_eq!(blob.format(), BlobFormat::Jpeg);
        assert!(!blob.is_empty());
    }
}
