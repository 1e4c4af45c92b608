//! Bounded downscaling for picked images.
//!
//! Hosts commonly cap the dimensions of a returned image (max width/height
//! picker options). [`resize_to_fit`] scales the longest edge down to a
//! bound while preserving aspect ratio; an image that already fits is
//! returned unchanged. Upscaling never happens here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::{RasterError, RasterImage};

/// Errors for resize operations.
#[derive(Debug, Error)]
pub enum ResizeError {
    /// The maximum edge bound was zero.
    #[error("maximum edge must be non-zero")]
    ZeroMaxEdge,

    /// The pixel buffer no longer matches the image dimensions.
    #[error(transparent)]
    InvalidRaster(#[from] RasterError),
}

/// Interpolation filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to fit within a maximum edge length, preserving aspect
/// ratio.
///
/// The image is scaled so that its longest edge equals `max_edge`. If it
/// already fits, a clone of the input is returned.
///
/// # Errors
///
/// Returns `ResizeError::ZeroMaxEdge` if `max_edge` is zero.
pub fn resize_to_fit(
    image: &RasterImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<RasterImage, ResizeError> {
    if max_edge == 0 {
        return Err(ResizeError::ZeroMaxEdge);
    }

    if image.width() <= max_edge && image.height() <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = fit_dimensions(image.width(), image.height(), max_edge);

    let dynamic = image.to_dynamic().ok_or(RasterError::InvalidPixelData {
        expected: u64::from(image.width())
            * u64::from(image.height())
            * image.format().bytes_per_pixel() as u64,
        actual: image.byte_size() as u64,
    })?;

    let resized = dynamic.resize_exact(new_width, new_height, filter.to_image_filter());

    let result = if resized.color().has_alpha() {
        RasterImage::from_rgba_image(resized.into_rgba8())?
    } else {
        RasterImage::from_rgb_image(resized.into_rgb8())?
    };
    Ok(result)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let ratio = f64::from(width) / f64::from(height);

    if width >= height {
        // Landscape or square: constrain by width
        let new_height = (f64::from(max_edge) / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_width = (f64::from(max_edge) * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelFormat;

    fn gradient_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        RasterImage::new(width, height, PixelFormat::Rgb8, pixels).unwrap()
    }

    #[test]
    fn test_resize_to_fit_landscape() {
        let img = gradient_image(200, 100);
        let result = resize_to_fit(&img, 100, FilterType::Bilinear).unwrap();

        assert_eq!(result.width(), 100);
        assert_eq!(result.height(), 50);
        assert_eq!(result.format(), PixelFormat::Rgb8);
    }

    #[test]
    fn test_resize_to_fit_portrait() {
        let img = gradient_image(100, 200);
        let result = resize_to_fit(&img, 50, FilterType::Bilinear).unwrap();

        assert_eq!(result.width(), 25);
        assert_eq!(result.height(), 50);
    }

    #[test]
    fn test_resize_already_fits_unchanged() {
        let img = gradient_image(60, 40);
        let result = resize_to_fit(&img, 100, FilterType::Lanczos3).unwrap();

        assert_eq!(result.width(), 60);
        assert_eq!(result.height(), 40);
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_resize_zero_max_edge() {
        let img = gradient_image(10, 10);
        let result = resize_to_fit(&img, 0, FilterType::Bilinear);
        assert!(matches!(result, Err(ResizeError::ZeroMaxEdge)));
    }

    #[test]
    fn test_resize_preserves_alpha_format() {
        let img =
            RasterImage::new(40, 20, PixelFormat::Rgba8, vec![200u8; 40 * 20 * 4]).unwrap();
        let result = resize_to_fit(&img, 10, FilterType::Nearest).unwrap();

        assert_eq!(result.format(), PixelFormat::Rgba8);
        assert_eq!(result.width(), 10);
        assert_eq!(result.height(), 5);
    }

    #[test]
    fn test_resize_extreme_aspect_ratio_keeps_min_edge() {
        // 100:1 aspect ratio, shrunk hard: the short edge must stay >= 1
        let img = gradient_image(400, 4);
        let result = resize_to_fit(&img, 50, FilterType::Bilinear).unwrap();

        assert_eq!(result.width(), 50);
        assert!(result.height() >= 1);
    }

    #[test]
    fn test_fit_dimensions_square() {
        assert_eq!(fit_dimensions(100, 100, 40), (40, 40));
    }

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }
}
