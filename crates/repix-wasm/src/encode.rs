//! Image compression WASM bindings.
//!
//! This module exposes the repix-core quality policy and JPEG encoder to
//! JavaScript.
//!
//! # Functions
//!
//! - [`should_compress`] - Whether a quality level warrants re-encoding
//! - [`compress_image`] - Encode a raster image to JPEG bytes
//!
//! # Example
//!
//! ```typescript
//! import { should_compress, compress_image } from '@repix/wasm';
//!
//! if (should_compress(quality)) {
//!   const jpeg = compress_image(image, quality);
//!   await writable.write(new Blob([jpeg], { type: 'image/jpeg' }));
//! }
//! ```

use repix_core::encode;
use repix_core::quality::Quality;
use wasm_bindgen::prelude::*;

use crate::types::JsRasterImage;

/// Validate a raw quality value from JavaScript.
///
/// JavaScript numbers arrive as u32; anything outside [0, 100] is a caller
/// contract violation and is rejected here before reaching the core.
pub(crate) fn quality_from_js(value: u32) -> Result<Quality, JsValue> {
    let out_of_range =
        || JsValue::from_str(&format!("quality {value} is out of range (expected 0-100)"));
    let raw = u8::try_from(value).map_err(|_| out_of_range())?;
    Quality::new(raw).map_err(|_| out_of_range())
}

/// Whether the given quality level warrants re-encoding.
///
/// `true` for quality in [0, 100), `false` at 100.
///
/// # Errors
///
/// Returns an error for quality outside [0, 100].
#[wasm_bindgen]
pub fn should_compress(quality: u32) -> Result<bool, JsValue> {
    Ok(quality_from_js(quality)?.should_compress())
}

/// Encode a raster image to JPEG bytes at the given quality.
///
/// # Arguments
///
/// * `image` - The decoded image to encode
/// * `quality` - JPEG quality (0-100, where 100 is highest fidelity)
///
/// # Returns
///
/// A `Uint8Array` containing the JPEG-encoded bytes, or an error if the
/// quality is out of range or encoding fails.
#[wasm_bindgen]
pub fn compress_image(image: &JsRasterImage, quality: u32) -> Result<Vec<u8>, JsValue> {
    let quality = quality_from_js(quality)?;
    encode::encode_jpeg(image.as_raster(), quality)
        .map(encode::EncodedBlob::into_bytes)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
