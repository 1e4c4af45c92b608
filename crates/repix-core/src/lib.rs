//! Repix Core - Image recompression library
//!
//! This crate provides the core recompression functionality for Repix:
//! deciding whether a requested quality level warrants re-encoding at all,
//! and turning a decoded raster image into a smaller JPEG representation.
//!
//! The typical flow is `decode` -> optional `resize` -> `encode`, or the
//! whole pipeline in one call via [`recompress::recompress`]. Quality 100 is
//! treated as a request for byte-identical output and short-circuits the
//! pipeline entirely.
//!
//! All operations are synchronous pure transformations over caller-owned
//! buffers; nothing is cached or retained between calls, so independent
//! calls are safe from any thread.

pub mod decode;
pub mod encode;
pub mod quality;
pub mod raster;
pub mod recompress;
pub mod resize;

pub use encode::{encode_jpeg, BlobFormat, Compressor, EncodeError, EncodedBlob, JpegCompressor};
pub use quality::{should_compress, Quality, QualityError};
pub use raster::{PixelFormat, RasterError, RasterImage};
pub use recompress::{recompress, RecompressError, RecompressOptions};
pub use resize::{resize_to_fit, FilterType, ResizeError};
