//! Recompression pipeline WASM bindings.
//!
//! One-call form of the library for hosts that hold encoded file bytes:
//! policy check, decode, optional bounded downscale, JPEG encode. Quality
//! 100 returns the input bytes unchanged.
//!
//! # Example
//!
//! ```typescript
//! import { recompress, recompress_with_options } from '@repix/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//!
//! // Simple form
//! const jpeg = recompress(bytes, 80);
//!
//! // With a dimension bound and explicit filter
//! const bounded = recompress_with_options(bytes, {
//!   quality: 80,
//!   max_edge: 2048,
//!   filter: 'Lanczos3',
//! });
//! ```

use repix_core::recompress::{self, RecompressOptions};
use wasm_bindgen::prelude::*;

use crate::encode::quality_from_js;

/// Recompress encoded image bytes at the given quality.
///
/// At quality 100 the input bytes are returned unchanged without being
/// decoded. Below 100 the image is decoded and re-encoded as baseline JPEG.
///
/// # Errors
///
/// Returns an error for quality outside [0, 100], or if the bytes cannot be
/// decoded or re-encoded.
#[wasm_bindgen]
pub fn recompress(source: &[u8], quality: u32) -> Result<Vec<u8>, JsValue> {
    let options = RecompressOptions::new(quality_from_js(quality)?);
    recompress::recompress(source, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Recompress encoded image bytes with full options.
///
/// `options` is a plain object matching `RecompressOptions`: `quality`
/// (0-100), optional `max_edge`, and `filter` (`'Nearest'`, `'Bilinear'`,
/// or `'Lanczos3'`).
#[wasm_bindgen]
pub fn recompress_with_options(source: &[u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options: RecompressOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    recompress::recompress(source, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}
