//! Repix WASM - WebAssembly bindings for Repix
//!
//! This crate adapts the repix-core recompression capability to
//! JavaScript/TypeScript hosts. The core is host-agnostic; this is the thin
//! call-convention adapter over its `should_compress` / `compress` surface.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Decoding and resize bindings
//! - `encode` - Quality policy and JPEG compression bindings
//! - `recompress` - One-call pipeline over encoded file bytes
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, compress_image, should_compress } from '@repix/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (should_compress(quality)) {
//!   const image = decode_image(bytes);
//!   const jpeg = compress_image(image, quality);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod recompress;
mod types;

// Re-export public types
pub use decode::{decode_image, image_info, resize_to_fit};
pub use encode::{compress_image, should_compress};
pub use recompress::{recompress, recompress_with_options};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&format!("repix {} ready", version()).into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
