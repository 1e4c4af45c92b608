//! The full recompression pipeline over encoded source bytes.
//!
//! `recompress` is the one-call form of the library: policy check, decode,
//! optional bounded downscale, JPEG encode. Quality 100 means the caller
//! asked for byte-identical output, so the source bytes pass through
//! without ever being decoded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_jpeg, EncodeError};
use crate::quality::Quality;
use crate::resize::{resize_to_fit, FilterType, ResizeError};

/// Errors surfaced by the recompression pipeline.
#[derive(Debug, Error)]
pub enum RecompressError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Resize(#[from] ResizeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Options for a recompression call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecompressOptions {
    /// Requested quality level. 100 skips recompression entirely.
    pub quality: Quality,
    /// Optional bound on the longest edge of the output image.
    pub max_edge: Option<u32>,
    /// Interpolation filter used when `max_edge` triggers a downscale.
    pub filter: FilterType,
}

impl RecompressOptions {
    /// Options with the given quality, no dimension bound, default filter.
    pub fn new(quality: Quality) -> Self {
        Self {
            quality,
            max_edge: None,
            filter: FilterType::default(),
        }
    }

    /// Bound the longest edge of the output image.
    pub fn with_max_edge(mut self, max_edge: u32) -> Self {
        self.max_edge = Some(max_edge);
        self
    }

    /// Use a specific interpolation filter for downscaling.
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}

/// Recompress encoded image bytes according to the options.
///
/// At quality 100 the source bytes are returned unchanged - the image is
/// never decoded, so even non-image bytes pass through. Below 100 the
/// source is decoded, optionally downscaled to fit `max_edge`, and encoded
/// as baseline JPEG at the requested quality.
///
/// # Errors
///
/// Propagates decode, resize and encode failures as-is; nothing is retried
/// and no partial output is produced.
pub fn recompress(source: &[u8], options: &RecompressOptions) -> Result<Vec<u8>, RecompressError> {
    if !options.quality.should_compress() {
        return Ok(source.to_vec());
    }

    let decoded = decode_image(source)?;

    let decoded = match options.max_edge {
        Some(max_edge) => resize_to_fit(&decoded, max_edge, options.filter)?,
        None => decoded,
    };

    let blob = encode_jpeg(&decoded, options.quality)?;
    Ok(blob.into_bytes())
}
