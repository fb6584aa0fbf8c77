//! Error types for bloomcap operations.
//!
//! The error surface is deliberately small: the only fallible operation is
//! construction, where the sizing formulas are undefined for a zero capacity or
//! a false-positive rate outside `(0, 1)`. Capacity exhaustion is *not* an
//! error — [`BloomFilter::insert`](crate::BloomFilter::insert) reports it by
//! returning `false`.
//!
//! # Error Propagation
//!
//! ```
//! use bloomcap::{BloomFilter, Result};
//!
//! fn build(capacity: usize, fp_rate: f64) -> Result<BloomFilter> {
//!     let filter = BloomFilter::new(capacity, fp_rate)?;
//!     Ok(filter)
//! }
//! # assert!(build(1000, 0.01).is_ok());
//! # assert!(build(0, 0.01).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bloomcap operations.
///
/// All fallible operations return [`Result<T>`] where the error type is
/// [`BloomCapError`].
pub type Result<T> = std::result::Result<T, BloomCapError>;

/// Errors that can occur when constructing a Bloom filter.
///
/// `Clone` + `PartialEq` enable testing and error comparison; each variant
/// carries the offending value for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomCapError {
    /// Capacity must be greater than 0.
    ///
    /// A zero capacity makes the sizing formulas divide by zero, and the
    /// resulting filter could never accept an insertion.
    InvalidCapacity {
        /// The invalid capacity that was provided.
        capacity: usize,
    },

    /// False positive rate out of valid bounds `(0, 1)`.
    ///
    /// Bloom filters require `0 < ε < 1`:
    /// - `ε = 0` would require infinite memory
    /// - `ε = 1` accepts everything (useless)
    /// - values outside `[0, 1]` are not probabilities
    FalsePositiveRateOutOfBounds {
        /// The invalid false positive rate that was provided.
        fp_rate: f64,
    },

    /// Bit vector size must be greater than 0.
    ///
    /// Surfaced by [`BitVec::new`](crate::core::BitVec::new) when asked for a
    /// zero-bit vector.
    InvalidBitCount {
        /// The invalid bit count that was requested.
        bits: usize,
    },
}

impl fmt::Display for BloomCapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { capacity } => {
                write!(
                    f,
                    "Invalid capacity: {}. Capacity must be greater than 0.",
                    capacity
                )
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidBitCount { bits } => {
                write!(
                    f,
                    "Invalid bit vector size: {} bits. Must be greater than 0.",
                    bits
                )
            }
        }
    }
}

impl std::error::Error for BloomCapError {}

impl BloomCapError {
    /// Create an `InvalidCapacity` error.
    #[must_use]
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidBitCount` error.
    #[must_use]
    pub fn invalid_bit_count(bits: usize) -> Self {
        Self::InvalidBitCount { bits }
    }
}
