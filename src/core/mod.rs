//! Core building blocks: bit storage and sizing math.
//!
//! These are the deterministic, hash-free parts of the filter. [`BitVec`]
//! owns the byte buffer; [`params`] turns a `(capacity, error_rate)` pair into
//! bit and seed counts. [`crate::BloomFilter`] composes them with a hash
//! provider from [`crate::hash`].

pub mod bitvec;
pub mod params;

pub use bitvec::BitVec;
pub use params::{expected_fp_rate, required_bits, seed_count};
