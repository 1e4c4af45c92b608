//! Quality levels and the compress/no-compress policy.
//!
//! A [`Quality`] is a validated integer in [0, 100]. 100 means "no
//! perceptible loss requested", which the policy treats as a request for
//! byte-identical output: recompression at quality 100 is wasted work, so
//! [`should_compress`] returns `false` for it and `true` for everything
//! below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for quality values outside the valid range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QualityError {
    /// The raw value was greater than 100.
    #[error("quality {0} is out of range (expected 0-100)")]
    OutOfRange(u8),
}

/// A validated quality level in [0, 100].
///
/// Construction rejects out-of-range values rather than clamping them:
/// a caller passing 150 has violated the contract and should hear about it,
/// not silently get quality 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    /// Maximum quality; requests byte-identical output (no re-encoding).
    pub const FULL: Quality = Quality(100);

    /// Create a quality level, rejecting values above 100.
    pub fn new(value: u8) -> Result<Self, QualityError> {
        if value > 100 {
            return Err(QualityError::OutOfRange(value));
        }
        Ok(Quality(value))
    }

    /// Get the raw value (0-100).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether this quality level warrants re-encoding.
    ///
    /// `true` for any quality strictly below 100, `false` at 100.
    pub fn should_compress(self) -> bool {
        self.0 < 100
    }
}

impl TryFrom<u8> for Quality {
    type Error = QualityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Quality::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> u8 {
        quality.0
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the given quality level warrants re-encoding.
///
/// Free-function form of [`Quality::should_compress`] for callers that
/// prefer the policy as a standalone predicate.
pub fn should_compress(quality: Quality) -> bool {
    quality.should_compress()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every quality strictly below 100 requests compression.
        #[test]
        fn prop_below_full_compresses(value in 0u8..100) {
            let quality = Quality::new(value).unwrap();
            prop_assert!(quality.should_compress());
        }

        /// Property: every value above 100 is rejected at construction.
        #[test]
        fn prop_out_of_range_rejected(value in 101u8..=255) {
            prop_assert_eq!(Quality::new(value), Err(QualityError::OutOfRange(value)));
        }

        /// Property: construction round-trips the raw value.
        #[test]
        fn prop_get_round_trips(value in 0u8..=100) {
            prop_assert_eq!(Quality::new(value).unwrap().get(), value);
        }
    }
}
