//! The fixed-capacity Bloom filter.

use crate::core::{params, BitVec};
use crate::error::Result;
use crate::hash::{DefaultHasher, SeededHasher};

/// A fixed-capacity Bloom filter with a bounded false-positive rate.
///
/// Sized at construction for a target `(capacity, error_rate)` pair: the bit
/// vector and hash-seed count are derived from the classic optimal-sizing
/// formulas, and once `capacity` successful insertions have occurred the
/// filter is full and [`insert`](Self::insert) rejects further items. It
/// never resizes, so the false-positive guarantee holds for its whole
/// lifetime.
///
/// Guarantees:
/// - **No false negatives.** Every inserted item reports as present.
/// - **Bounded false positives.** At full capacity the expected rate is at
///   most the requested `error_rate`.
///
/// The filter accepts anything viewable as bytes (`impl AsRef<[u8]>`):
/// strings, byte slices, vectors. Duplicate inserts set no new bits but still
/// consume capacity — the filter cannot tell a duplicate from a collision.
///
/// # Examples
///
/// ```
/// use bloomcap::BloomFilter;
///
/// let mut filter = BloomFilter::new(1000, 0.01)?;
///
/// assert!(filter.insert("alice"));
/// assert!(filter.insert(b"bob".as_slice()));
///
/// assert!(filter.contains("alice"));
/// assert!(!filter.contains("mallory"));
///
/// assert_eq!(filter.inserted(), 2);
/// assert!(!filter.is_full());
/// # Ok::<(), bloomcap::BloomCapError>(())
/// ```
///
/// Custom hash provider:
///
/// ```
/// use bloomcap::{BloomFilter, Murmur3Hasher};
///
/// let filter = BloomFilter::with_hasher(100, 0.05, Murmur3Hasher::new())?;
/// assert_eq!(filter.capacity(), 100);
/// # Ok::<(), bloomcap::BloomCapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilter<H = DefaultHasher>
where
    H: SeededHasher + Clone,
{
    bits: BitVec,
    seeds: Box<[u32]>,
    capacity: usize,
    error_rate: f64,
    inserted: usize,
    hasher: H,
}

impl BloomFilter<DefaultHasher> {
    /// Create a filter sized for `capacity` elements at `error_rate`, using
    /// the default MurmurHash3 provider.
    ///
    /// The bit count is `⌈capacity × -ln(error_rate) / (ln 2)²⌉` rounded up
    /// to a whole number of bytes; the seed count is derived from the
    /// realized size. Rounding only adds bits, so the realized rate at full
    /// capacity is at most the requested one.
    ///
    /// # Errors
    ///
    /// - [`BloomCapError::InvalidCapacity`](crate::BloomCapError::InvalidCapacity)
    ///   if `capacity == 0`
    /// - [`BloomCapError::FalsePositiveRateOutOfBounds`](crate::BloomCapError::FalsePositiveRateOutOfBounds)
    ///   if `error_rate` is not in `(0, 1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomcap::BloomFilter;
    ///
    /// let filter = BloomFilter::new(1000, 0.01)?;
    /// assert_eq!(filter.bit_count(), 9592);
    /// assert_eq!(filter.hash_count(), 6);
    /// # Ok::<(), bloomcap::BloomCapError>(())
    /// ```
    pub fn new(capacity: usize, error_rate: f64) -> Result<Self> {
        Self::with_hasher(capacity, error_rate, DefaultHasher::new())
    }
}

impl<H> BloomFilter<H>
where
    H: SeededHasher + Clone,
{
    /// Create a filter with an explicit hash provider.
    ///
    /// Same sizing and validation as [`BloomFilter::new`].
    ///
    /// # Errors
    ///
    /// See [`BloomFilter::new`].
    pub fn with_hasher(capacity: usize, error_rate: f64, hasher: H) -> Result<Self> {
        let requested = params::required_bits(capacity, error_rate)?;
        let bits = BitVec::new(requested)?;

        // Seeds come from the realized (byte-rounded) size, not the request.
        let k = params::seed_count(bits.len(), capacity);
        let seeds: Box<[u32]> = (0..k as u32).collect();

        Ok(Self {
            bits,
            seeds,
            capacity,
            error_rate,
            inserted: 0,
            hasher,
        })
    }

    /// Insert an item, returning whether it was accepted.
    ///
    /// Returns `false` without touching the filter if it is already full.
    /// Otherwise sets the item's `k` bit positions, counts the insertion, and
    /// returns `true`. Inserting the same item twice consumes capacity twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomcap::BloomFilter;
    ///
    /// let mut filter = BloomFilter::new(1, 0.001)?;
    /// assert!(filter.insert("only"));
    /// assert!(!filter.insert("rejected")); // full
    /// # Ok::<(), bloomcap::BloomCapError>(())
    /// ```
    pub fn insert(&mut self, item: impl AsRef<[u8]>) -> bool {
        if self.inserted == self.capacity {
            return false;
        }

        let bytes = item.as_ref();
        for i in 0..self.seeds.len() {
            let index = self.index_for(bytes, self.seeds[i]);
            self.bits.set(index);
        }
        self.inserted += 1;

        true
    }

    /// Test whether an item might be in the filter.
    ///
    /// `false` means the item was definitely never inserted; `true` means it
    /// probably was, with a false-positive chance bounded by the configured
    /// `error_rate`. Short-circuits on the first unset bit and never mutates.
    #[must_use]
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        let bytes = item.as_ref();
        self.seeds
            .iter()
            .all(|&seed| self.bits.get(self.index_for(bytes, seed)))
    }

    /// Returns `true` once `capacity` insertions have been accepted.
    #[must_use]
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inserted == self.capacity
    }

    /// Number of accepted insertions so far (duplicates included).
    #[must_use]
    #[inline]
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// Maximum number of insertions, fixed at construction.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Target false-positive rate, fixed at construction.
    #[must_use]
    #[inline]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Realized size of the bit vector, in bits. Always a multiple of 8.
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash functions (seeds) applied per item.
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.seeds.len()
    }

    /// Number of set bits in the underlying bit vector.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits currently set, in `[0, 1]`.
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.bits.len() as f64
    }

    /// Expected false-positive rate at the current fill level.
    ///
    /// Grows from 0 on an empty filter toward the configured `error_rate` as
    /// it fills.
    #[must_use]
    pub fn current_fp_rate(&self) -> f64 {
        params::expected_fp_rate(self.bits.len(), self.inserted, self.seeds.len())
    }

    /// Approximate heap memory used by the filter, in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage() + self.seeds.len() * std::mem::size_of::<u32>()
    }

    #[inline]
    fn index_for(&self, bytes: &[u8], seed: u32) -> usize {
        self.hasher.hash_with_seed(bytes, seed) as usize % self.bits.len()
    }
}
