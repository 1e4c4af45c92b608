//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the repix-core
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use repix_core::raster::{PixelFormat, RasterImage};
use repix_core::resize::FilterType;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// Wraps the core `RasterImage` type with a JavaScript-friendly interface
/// for dimensions and pixel data.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. Calling `pixels()` copies it into
/// JavaScript memory as a `Uint8Array`. The `free()` method can release
/// WASM memory explicitly, but wasm-bindgen's finalizer handles cleanup
/// automatically.
#[wasm_bindgen]
#[derive(Debug)]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new JsRasterImage from dimensions and pixel data.
    ///
    /// The pixel format is inferred from the buffer length: `width * height
    /// * 3` bytes is RGB, `width * height * 4` bytes is RGBA. Any other
    /// length is rejected.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRasterImage, JsValue> {
        let pixel_count = (width as usize) * (height as usize);
        let format = if pixels.len() == pixel_count * 4 {
            PixelFormat::Rgba8
        } else {
            PixelFormat::Rgb8
        };

        RasterImage::new(width, height, format, pixels)
            .map(|inner| JsRasterImage { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Whether the pixel buffer carries an alpha channel
    #[wasm_bindgen(getter)]
    pub fn has_alpha(&self) -> bool {
        self.inner.format() == PixelFormat::Rgba8
    }

    /// Returns the pixel data as a Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data for safe memory
    /// management across the WASM boundary.
    pub fn pixels(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.inner.pixels())
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer handles cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRasterImage {
    /// Create a JsRasterImage from a core RasterImage.
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped core image.
    pub(crate) fn as_raster(&self) -> &RasterImage {
        &self.inner
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear, // Default
    }
}
