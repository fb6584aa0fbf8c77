//! Seeded hash providers.
//!
//! The filter derives its `k` bit positions by running one hash algorithm
//! under `k` different seeds; [`SeededHasher`] is the seam that makes the
//! algorithm pluggable. [`Murmur3Hasher`] is the default, and an XXH32-based
//! provider is available behind the `xxhash` feature.
//!
//! # Implementing a custom hasher
//!
//! ```
//! use bloomcap::hash::SeededHasher;
//!
//! #[derive(Clone, Copy)]
//! struct Fnv1a32;
//!
//! impl SeededHasher for Fnv1a32 {
//!     fn hash_with_seed(&self, bytes: &[u8], seed: u32) -> u32 {
//!         let mut hash = 0x811c_9dc5u32 ^ seed;
//!         for &byte in bytes {
//!             hash ^= u32::from(byte);
//!             hash = hash.wrapping_mul(0x0100_0193);
//!         }
//!         hash
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "fnv1a-32"
//!     }
//! }
//! ```

pub mod murmur3;

#[cfg(feature = "xxhash")]
pub mod xxhash;

pub use murmur3::Murmur3Hasher;

#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;

/// Default hash provider used by [`BloomFilter::new`](crate::BloomFilter::new).
pub type DefaultHasher = Murmur3Hasher;

/// A seeded 32-bit hash function family.
///
/// Implementations must be pure: the same `(bytes, seed)` pair always yields
/// the same value, with no interior state. Distinct seeds should behave as
/// statistically independent hash functions — the filter's false-positive
/// guarantee depends on it.
///
/// Empty input is valid; every seed value is valid.
pub trait SeededHasher: Send + Sync {
    /// Hash `bytes` under `seed`.
    fn hash_with_seed(&self, bytes: &[u8], seed: u32) -> u32;

    /// Short algorithm name for diagnostics.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spread(hasher: &impl SeededHasher, buckets: usize) -> Vec<usize> {
        let mut counts = vec![0usize; buckets];
        for i in 0..1000 {
            let key = format!("key-{i}");
            let idx = hasher.hash_with_seed(key.as_bytes(), 0) as usize % buckets;
            counts[idx] += 1;
        }
        counts
    }

    #[test]
    fn test_default_hasher_is_deterministic() {
        let hasher = DefaultHasher::new();
        let a = hasher.hash_with_seed(b"determinism", 7);
        let b = hasher.hash_with_seed(b"determinism", 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_seeds_give_distinct_hashes() {
        let hasher = DefaultHasher::new();
        let values: Vec<u32> = (0..8)
            .map(|seed| hasher.hash_with_seed(b"seed independence", seed))
            .collect();

        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                assert_ne!(values[i], values[j], "seeds {i} and {j} collided");
            }
        }
    }

    #[test]
    fn test_reasonable_bucket_spread() {
        // 1000 keys over 64 buckets: ~15.6 each. A skew past 3x the mean
        // would indicate a broken hash.
        let counts = spread(&DefaultHasher::new(), 64);
        assert!(counts.iter().all(|&c| c < 47), "skewed spread: {counts:?}");
        assert!(counts.iter().filter(|&&c| c > 0).count() > 48);
    }
}
