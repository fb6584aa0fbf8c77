//! Sizing formulas for fixed-capacity Bloom filters.
//!
//! Given a target capacity `n` and false-positive rate `ε`, the classic
//! analysis (Bloom, 1970) gives:
//!
//! - `m = ⌈-n × ln(ε) / (ln 2)²⌉` bits
//! - `k = ⌊(m/n) × ln 2⌋` hash functions
//!
//! The bit count is subsequently rounded up to a whole number of bytes by
//! [`BitVec::new`](crate::core::BitVec::new), and `k` is recomputed from the
//! realized size, so the realized false-positive rate at full capacity is at
//! most the requested one.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with
//!   Allowable Errors"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomCapError, Result};
use std::f64::consts::LN_2;

/// Mathematical constant: `(ln 2)²` ≈ 0.4804530139182014.
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Minimum number of hash seeds.
///
/// The `⌊(m/n) × ln 2⌋` formula can reach 0 for extreme bit/element ratios; a
/// filter with zero seeds would report every query as present, so the seed
/// count is clamped here.
pub const MIN_SEEDS: usize = 1;

/// Calculate the number of bits needed for `capacity` elements at `fp_rate`.
///
/// Implements `m = ⌈-n × ln(ε) / (ln 2)²⌉`, the optimal bit count for a target
/// false-positive rate at full capacity.
///
/// # Errors
///
/// - [`BloomCapError::InvalidCapacity`] if `capacity == 0`
/// - [`BloomCapError::FalsePositiveRateOutOfBounds`] if `fp_rate` is not in `(0, 1)`
///
/// # Examples
///
/// ```
/// use bloomcap::core::params::required_bits;
///
/// // 1000 elements at a 1% false-positive rate need ~9.6 bits each
/// assert_eq!(required_bits(1000, 0.01).unwrap(), 9586);
/// assert_eq!(required_bits(1000, 0.001).unwrap(), 14378);
/// ```
pub fn required_bits(capacity: usize, fp_rate: f64) -> Result<usize> {
    if capacity == 0 {
        return Err(BloomCapError::invalid_capacity(capacity));
    }

    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(BloomCapError::fp_rate_out_of_bounds(fp_rate));
    }

    let m = (capacity as f64 * -fp_rate.ln()) / LN2_SQUARED;

    Ok(m.ceil() as usize)
}

/// Calculate the number of hash seeds for a filter of `bits` bits sized for
/// `capacity` elements.
///
/// Implements `k = ⌊(m/n) × ln 2⌋`, clamped to at least [`MIN_SEEDS`].
///
/// # Examples
///
/// ```
/// use bloomcap::core::params::seed_count;
///
/// assert_eq!(seed_count(9592, 1000), 6);
/// assert_eq!(seed_count(144, 10), 9);
///
/// // Degenerate ratios clamp to one seed instead of zero
/// assert_eq!(seed_count(104, 100), 1);
/// ```
#[must_use]
pub fn seed_count(bits: usize, capacity: usize) -> usize {
    debug_assert!(bits > 0, "bits must be > 0");
    debug_assert!(capacity > 0, "capacity must be > 0");

    let k = ((bits as f64 / capacity as f64) * LN_2).floor() as usize;

    k.max(MIN_SEEDS)
}

/// Calculate the expected false-positive rate after `inserted` elements.
///
/// Implements `p = (1 - e^(-k·n/m))^k` for a filter of `bits` bits with `k`
/// hash seeds. Used for introspection and statistical tests; an empty filter
/// has rate 0.
///
/// # Examples
///
/// ```
/// use bloomcap::core::params::expected_fp_rate;
///
/// let p = expected_fp_rate(9592, 1000, 6);
/// assert!(p > 0.005 && p < 0.02);
///
/// assert_eq!(expected_fp_rate(9592, 0, 6), 0.0);
/// ```
#[must_use]
pub fn expected_fp_rate(bits: usize, inserted: usize, k: usize) -> f64 {
    debug_assert!(bits > 0, "bits must be > 0");
    debug_assert!(k > 0, "k must be > 0");

    if inserted == 0 {
        return 0.0;
    }

    let exponent = -((k * inserted) as f64) / bits as f64;
    let prob_bit_set = 1.0 - exponent.exp();

    prob_bit_set.powf(k as f64).clamp(0.0, 1.0)
}
