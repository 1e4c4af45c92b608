//! Decoded raster image buffers.
//!
//! [`RasterImage`] is the exchange type between decode, resize and encode:
//! an immutable pixel buffer with explicit dimensions and pixel format.
//! Validation happens once at construction, so every `RasterImage` reaching
//! the rest of the pipeline is known to be non-degenerate with a buffer
//! that matches its dimensions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for raster image construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length doesn't match the dimensions and format.
    #[error("invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: u64, actual: u64 },
}

/// Pixel layout of a decoded image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 3 bytes per pixel, row-major RGB.
    #[default]
    Rgb8,
    /// 4 bytes per pixel, row-major RGBA.
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// A decoded image: dimensions, pixel format, and the pixel buffer.
///
/// Immutable once constructed. The buffer is row-major with
/// `width * height * bytes_per_pixel` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a raster image, validating dimensions and buffer length.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidDimensions` if either dimension is zero,
    /// or `RasterError::InvalidPixelData` if the buffer length doesn't match
    /// `width * height * bytes_per_pixel`.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        // Widened so the length check cannot wrap on 32-bit targets
        let expected =
            u128::from(width) * u128::from(height) * format.bytes_per_pixel() as u128;
        if expected != pixels.len() as u128 {
            return Err(RasterError::InvalidPixelData {
                expected: u64::try_from(expected).unwrap_or(u64::MAX),
                actual: pixels.len() as u64,
            });
        }

        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout of the buffer.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The pixel buffer in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Create a RasterImage from an `image::RgbImage`.
    ///
    /// Only fails for a zero-sized buffer; the `image` crate guarantees the
    /// length invariant for its own buffers.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, RasterError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, PixelFormat::Rgb8, img.into_raw())
    }

    /// Create a RasterImage from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Self, RasterError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, PixelFormat::Rgba8, img.into_raw())
    }

    /// Convert to a `DynamicImage` for codec and resize operations.
    ///
    /// Clones the pixel buffer. Returns `None` only if the buffer no longer
    /// matches the dimensions, which construction rules out.
    pub fn to_dynamic(&self) -> Option<image::DynamicImage> {
        match self.format {
            PixelFormat::Rgb8 => {
                image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
                    .map(image::DynamicImage::ImageRgb8)
            }
            PixelFormat::Rgba8 => {
                image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
                    .map(image::DynamicImage::ImageRgba8)
            }
        }
    }

    /// Consume the image and return the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_image_creation() {
        let img = RasterImage::new(100, 50, PixelFormat::Rgb8, vec![0u8; 100 * 50 * 3]).unwrap();

        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.format(), PixelFormat::Rgb8);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 15000);
    }

    #[test]
    fn test_raster_image_rgba() {
        let img = RasterImage::new(10, 10, PixelFormat::Rgba8, vec![255u8; 10 * 10 * 4]).unwrap();
        assert_eq!(img.byte_size(), 400);
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = RasterImage::new(0, 100, PixelFormat::Rgb8, vec![]);
        assert_eq!(
            result,
            Err(RasterError::InvalidDimensions {
                width: 0,
                height: 100
            })
        );
    }

    #[test]
    fn test_zero_height_rejected() {
        let result = RasterImage::new(100, 0, PixelFormat::Rgb8, vec![]);
        assert!(matches!(
            result,
            Err(RasterError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_buffer_length_mismatch_rejected() {
        // One row short
        let result = RasterImage::new(100, 100, PixelFormat::Rgb8, vec![0u8; 99 * 100 * 3]);
        assert_eq!(
            result,
            Err(RasterError::InvalidPixelData {
                expected: 30000,
                actual: 29700
            })
        );

        // RGB-sized buffer declared as RGBA
        let result = RasterImage::new(10, 10, PixelFormat::Rgba8, vec![0u8; 10 * 10 * 3]);
        assert!(matches!(result, Err(RasterError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_huge_dimensions_never_match_small_buffer() {
        // width * height * 3 is a multiple of 2^32 here, so a wrapping
        // 32-bit length check would accept the empty buffer
        let result = RasterImage::new(1 << 30, 4, PixelFormat::Rgb8, vec![]);
        assert!(matches!(result, Err(RasterError::InvalidPixelData { .. })));

        let result = RasterImage::new(u32::MAX, u32::MAX, PixelFormat::Rgba8, vec![0u8; 16]);
        assert!(matches!(result, Err(RasterError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_from_rgb_image() {
        let rgb = image::RgbImage::from_pixel(4, 2, image::Rgb([10, 20, 30]));
        let img = RasterImage::from_rgb_image(rgb).unwrap();

        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(&img.pixels()[0..3], &[10, 20, 30]);
    }

    #[test]
    fn test_to_dynamic_round_trip() {
        let img = RasterImage::new(3, 3, PixelFormat::Rgba8, vec![128u8; 3 * 3 * 4]).unwrap();
        let dynamic = img.to_dynamic().unwrap();

        assert_eq!(dynamic.width(), 3);
        assert_eq!(dynamic.height(), 3);
        assert!(dynamic.color().has_alpha());
    }

    #[test]
    fn test_raster_error_display() {
        let err = RasterError::InvalidDimensions {
            width: 0,
            height: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimensions: width (0) and height (5) must be non-zero"
        );
    }
}
