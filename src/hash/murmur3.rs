//! MurmurHash3 x86 32-bit provider (the default).

use super::SeededHasher;

/// Seeded MurmurHash3 (x86, 32-bit variant) via the `mur3` crate.
///
/// Fast, well-distributed, and natively seeded, which makes it a natural fit
/// for deriving a family of `k` hash functions from sequential seeds.
///
/// # Examples
///
/// ```
/// use bloomcap::hash::{Murmur3Hasher, SeededHasher};
///
/// let hasher = Murmur3Hasher::new();
/// assert_eq!(hasher.hash_with_seed(b"test", 0), 0xba6b_d213);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur3Hasher;

impl Murmur3Hasher {
    /// Create a new MurmurHash3 provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SeededHasher for Murmur3Hasher {
    #[inline]
    fn hash_with_seed(&self, bytes: &[u8], seed: u32) -> u32 {
        mur3::murmurhash3_x86_32(bytes, seed)
    }

    fn name(&self) -> &'static str {
        "murmur3-x86-32"
    }
}
