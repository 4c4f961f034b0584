//! Benchmark input profiles for the Scribe text buffer.
//!
//! Inputs come from a seeded ChaCha generator so runs are comparable:
//!
//! - [`uniform_u64`]: full-range values, mostly 19–20 digits
//! - [`mixed_width_u64`]: values spread evenly across 1..=20 digits
//! - [`signed_i64`]: [`mixed_width_u64`] with random signs
//! - [`finite_f64`]: random finite doubles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of values in each generated profile.
pub const PROFILE_LEN: usize = 4096;

/// Full-range random `u64` values.
pub fn uniform_u64(seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..PROFILE_LEN).map(|_| rng.next_u64()).collect()
}

/// Random `u64` values with a uniformly distributed digit count.
///
/// Uniform values are almost all 19–20 digits long, which hides the cost
/// of short numbers that dominate real logs.
pub fn mixed_width_u64(seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..PROFILE_LEN)
        .map(|_| {
            let digits = (rng.next_u32() % 20) + 1;
            let bound = 10u64.checked_pow(digits).unwrap_or(u64::MAX);
            rng.next_u64() % bound
        })
        .collect()
}

/// [`mixed_width_u64`] reinterpreted with random signs.
pub fn signed_i64(seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5151);
    mixed_width_u64(seed)
        .into_iter()
        .map(|v| {
            let magnitude = (v >> 1) as i64;
            if rng.next_u32() & 1 == 0 {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect()
}

/// Random finite `f64` values drawn from raw bit patterns.
pub fn finite_f64(seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(PROFILE_LEN);
    while values.len() < PROFILE_LEN {
        let v = f64::from_bits(rng.next_u64());
        if v.is_finite() {
            values.push(v);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(uniform_u64(7), uniform_u64(7));
        assert_eq!(signed_i64(7), signed_i64(7));
        assert_ne!(uniform_u64(7), uniform_u64(8));
    }

    #[test]
    fn mixed_width_covers_short_and_long() {
        let values = mixed_width_u64(42);
        assert_eq!(values.len(), PROFILE_LEN);
        assert!(values.iter().any(|&v| v < 10));
        assert!(values.iter().any(|&v| v >= 10_000_000_000_000_000));
    }

    #[test]
    fn floats_are_finite() {
        assert!(finite_f64(1).iter().all(|v| v.is_finite()));
    }
}
