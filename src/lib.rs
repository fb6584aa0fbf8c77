//! # bloomcap
//!
//! A fixed-capacity Bloom filter: probabilistic set membership with a bounded
//! false-positive rate and zero false negatives.
//!
//! Unlike growable filter libraries, `bloomcap` treats capacity as a hard
//! contract. The filter is sized once, at construction, for a target element
//! count and false-positive rate; when that many insertions have happened it
//! is full and further inserts are rejected with `false`. Because the filter
//! never resizes, the false-positive guarantee can never silently degrade.
//!
//! ## Quick start
//!
//! ```
//! use bloomcap::BloomFilter;
//!
//! // Room for 10 elements at a 0.1% false-positive rate
//! let mut filter = BloomFilter::new(10, 0.001)?;
//!
//! assert!(filter.insert("2TESTING1"));
//! assert!(filter.contains("2TESTING1"));
//! assert!(!filter.contains("TESTING2"));
//! # Ok::<(), bloomcap::BloomCapError>(())
//! ```
//!
//! ## Sizing
//!
//! For `n` elements at rate `ε`, the filter allocates
//! `m = ⌈-n·ln(ε) / (ln 2)²⌉` bits (rounded up to whole bytes) and applies
//! `k = ⌊(m/n)·ln 2⌋` hash functions per item, derived by seeding one
//! algorithm with `0..k`. MurmurHash3 (x86, 32-bit) is the default; XXH32 is
//! available behind the `xxhash` feature, and any
//! [`SeededHasher`] implementation plugs in via
//! [`BloomFilter::with_hasher`].
//!
//! ## What this crate is not
//!
//! No deletion, no counting variant, no union/intersection, no resizing, and
//! no serialization of filter state. The filter mutates through `&mut self`
//! and is single-threaded; wrap it yourself if you need sharing.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod core;
pub mod error;
pub mod filter;
pub mod hash;

pub use error::{BloomCapError, Result};
pub use filter::BloomFilter;
pub use hash::{DefaultHasher, Murmur3Hasher, SeededHasher};

#[cfg(feature = "xxhash")]
pub use hash::XxHasher;

/// Convenience re-exports for glob import.
///
/// ```
/// use bloomcap::prelude::*;
///
/// let mut filter = BloomFilter::new(100, 0.01).unwrap();
/// assert!(filter.insert("item"));
/// ```
pub mod prelude {
    pub use crate::error::{BloomCapError, Result};
    pub use crate::filter::BloomFilter;
    pub use crate::hash::{Murmur3Hasher, SeededHasher};

    #[cfg(feature = "xxhash")]
    pub use crate::hash::XxHasher;
}
