//! Image decoding WASM bindings.
//!
//! This module exposes the repix-core decoding and resizing functions to
//! JavaScript.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode encoded image bytes (JPEG, PNG) with EXIF
//!   orientation applied
//! - [`resize_to_fit`] - Downscale an image to fit within a max edge,
//!   preserving aspect ratio
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, resize_to_fit } from '@repix/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const bounded = resize_to_fit(image, 2048, 2); // Lanczos3 filter
//! console.log(`Decoded ${bounded.width}x${bounded.height}`);
//! ```

use repix_core::{decode, resize};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::{filter_from_u8, JsRasterImage};

/// Dimensions and channel layout of a decoded image, marshalled to a plain
/// JavaScript object.
#[derive(Debug, Serialize)]
struct ImageInfo {
    width: u32,
    height: u32,
    has_alpha: bool,
}

/// Decode encoded image bytes into a raster image.
///
/// The format is sniffed from the bytes and EXIF orientation correction is
/// applied, so the returned pixels are upright.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized image format or are
/// corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to fit within a maximum edge length, preserving aspect
/// ratio.
///
/// `filter` selects the interpolation: 0 = Nearest, 1 = Bilinear,
/// 2 = Lanczos3. An image that already fits is returned unchanged.
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsRasterImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    resize_to_fit_impl(image, max_edge, filter).map_err(|e| JsValue::from_str(&e))
}

/// Binding body behind the `JsValue` boundary, so it can be exercised on
/// native targets too.
fn resize_to_fit_impl(
    image: &JsRasterImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsRasterImage, String> {
    resize::resize_to_fit(image.as_raster(), max_edge, filter_from_u8(filter))
        .map(JsRasterImage::from_raster)
        .map_err(|e| e.to_string())
}

/// Decode only the dimensions and channel layout of encoded image bytes.
///
/// Returns a plain object `{ width, height, has_alpha }`. Useful for hosts
/// that need to display metadata before committing to a full pixel
/// transfer.
#[wasm_bindgen]
pub fn image_info(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let image = decode::decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let info = ImageInfo {
        width: image.width(),
        height: image.height(),
        has_alpha: image.format() == repix_core::raster::PixelFormat::Rgba8,
    };
    serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for decode bindings.
///
/// Note: Functions returning `Result<T, JsValue>` can only be exercised end
/// to end on wasm32 targets; these tests cover what runs natively. The
/// underlying behavior is tested in `repix_core::decode`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_binding_downscales() {
        let img = JsRasterImage::new(40, 20, vec![128u8; 40 * 20 * 3]).unwrap();
        let result = resize_to_fit_impl(&img, 10, 1).unwrap();
        assert_eq!(result.width(), 10);
        assert_eq!(result.height(), 5);
    }

    #[test]
    fn test_resize_binding_zero_max_edge_errors() {
        let img = JsRasterImage::new(4, 4, vec![0u8; 4 * 4 * 3]).unwrap();
        let err = resize_to_fit_impl(&img, 0, 1).unwrap_err();
        assert!(err.contains("maximum edge"));
    }

    #[test]
    fn test_resize_binding_maps_filter_codes() {
        // Unknown filter codes fall back to bilinear rather than erroring
        let img = JsRasterImage::new(8, 8, vec![0u8; 8 * 8 * 3]).unwrap();
        assert!(resize_to_fit_impl(&img, 4, 99).is_ok());
    }
}

/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_invalid_bytes_errors() {
        assert!(decode_image(&[0x00, 0x01, 0x02]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_resize_zero_max_edge_errors() {
        let img = JsRasterImage::new(4, 4, vec![0u8; 4 * 4 * 3]).unwrap();
        assert!(resize_to_fit(&img, 0, 1).is_err());
    }

    #[wasm_bindgen_test]
    fn test_image_info_invalid_bytes_errors() {
        assert!(image_info(&[0xDE, 0xAD]).is_err());
    }
}
