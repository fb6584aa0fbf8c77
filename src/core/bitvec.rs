//! Byte-backed fixed-size bit vector.
//!
//! [`BitVec`] is the storage layer for the filter: a heap-allocated byte
//! buffer addressed one bit at a time. The length is always a whole number of
//! bytes — a requested bit count is rounded up to the next multiple of 8, and
//! the filter reads the realized size back via [`BitVec::len`].
//!
//! Bits only ever transition from 0 to 1; there is no `unset`. Deletion is not
//! supported by the filter, so the storage does not offer it either.

use crate::error::{BloomCapError, Result};

/// A fixed-size bit vector backed by a boxed byte slice.
///
/// Bit `i` lives at byte `i / 8`, mask `1 << (i % 8)`. Indexing out of bounds
/// panics; callers reduce hash values modulo [`len`](Self::len) before
/// touching the vector.
///
/// # Examples
///
/// ```
/// use bloomcap::core::BitVec;
///
/// let mut bits = BitVec::new(100).unwrap();
/// assert_eq!(bits.len(), 104); // rounded up to 13 bytes
///
/// bits.set(42);
/// assert!(bits.get(42));
/// assert!(!bits.get(43));
/// assert_eq!(bits.count_ones(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Box<[u8]>,
    len: usize,
}

impl BitVec {
    /// Create a zeroed bit vector holding at least `num_bits` bits.
    ///
    /// The realized length is `num_bits` rounded up to a multiple of 8; query
    /// it with [`len`](Self::len).
    ///
    /// # Errors
    ///
    /// Returns [`BloomCapError::InvalidBitCount`] if `num_bits == 0`.
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomCapError::invalid_bit_count(num_bits));
        }

        let num_bytes = (num_bits + 7) / 8;

        Ok(Self {
            bytes: vec![0u8; num_bytes].into_boxed_slice(),
            len: num_bytes * 8,
        })
    }

    /// Number of bits in the vector. Always a multiple of 8.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no bits.
    ///
    /// Unreachable through [`new`](Self::new), which rejects zero sizes, but
    /// required alongside `len` by convention.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes backing the vector.
    #[must_use]
    #[inline]
    pub fn num_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Set the bit at `index` to 1.
    ///
    /// Idempotent: setting an already-set bit is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "bit index {index} out of bounds for BitVec of {} bits",
            self.len
        );
        self.bytes[index / 8] |= 1 << (index % 8);
    }

    /// Read the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "bit index {index} out of bounds for BitVec of {} bits",
            self.len
        );
        self.bytes[index / 8] & (1 << (index % 8)) != 0
    }

    /// Count the number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Approximate heap memory used by the vector, in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rounds_up_to_whole_bytes() {
        assert_eq!(BitVec::new(1).unwrap().len(), 8);
        assert_eq!(BitVec::new(8).unwrap().len(), 8);
        assert_eq!(BitVec::new(9).unwrap().len(), 16);
        assert_eq!(BitVec::new(100).unwrap().len(), 104);
        assert_eq!(BitVec::new(9586).unwrap().len(), 9592);
    }

    #[test]
    fn test_new_zero_bits_fails() {
        assert_eq!(BitVec::new(0), Err(BloomCapError::invalid_bit_count(0)));
    }

    #[test]
    fn test_num_bytes() {
        let bits = BitVec::new(100).unwrap();
        assert_eq!(bits.num_bytes(), 13);
        assert_eq!(bits.len(), bits.num_bytes() * 8);
    }

    #[test]
    fn test_starts_zeroed() {
        let bits = BitVec::new(64).unwrap();
        assert_eq!(bits.count_ones(), 0);
        for i in 0..64 {
            assert!(!bits.get(i));
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut bits = BitVec::new(64).unwrap();

        bits.set(0);
        bits.set(7);
        bits.set(8);
        bits.set(63);

        assert!(bits.get(0));
        assert!(bits.get(7));
        assert!(bits.get(8));
        assert!(bits.get(63));
        assert!(!bits.get(1));
        assert!(!bits.get(9));
        assert_eq!(bits.count_ones(), 4);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut bits = BitVec::new(16).unwrap();

        bits.set(5);
        bits.set(5);
        bits.set(5);

        assert!(bits.get(5));
        assert_eq!(bits.count_ones(), 1);
    }

    #[test]
    fn test_set_does_not_disturb_neighbors() {
        let mut bits = BitVec::new(16).unwrap();

        bits.set(4);

        assert!(!bits.get(3));
        assert!(!bits.get(5));
        // Same byte, different bits
        assert!(!bits.get(0));
        assert!(!bits.get(7));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let bits = BitVec::new(8).unwrap();
        let _ = bits.get(8);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut bits = BitVec::new(8).unwrap();
        bits.set(8);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = BitVec::new(32).unwrap();
        original.set(3);

        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.set(17);
        assert!(copy.get(17));
        assert!(!original.get(17));
        assert_eq!(original.count_ones(), 1);
        assert_eq!(copy.count_ones(), 2);
    }

    #[test]
    fn test_memory_usage() {
        let bits = BitVec::new(9586).unwrap();
        assert!(bits.memory_usage() >= 1199);
    }
}
