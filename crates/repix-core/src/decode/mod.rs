//! Image decoding for the recompression pipeline.
//!
//! This module turns encoded file bytes into a [`RasterImage`]:
//! - Format sniffing (JPEG, PNG - whatever the enabled `image` features
//!   support)
//! - EXIF orientation correction, so downstream resize/encode operate on
//!   upright pixels
//!
//! Sources with an alpha channel decode to `Rgba8`; everything else decodes
//! to `Rgb8`.

mod exif;
mod reader;

pub use exif::{get_orientation, Orientation};
pub use reader::{decode_image, DecodeError};
