//! # Randomness Provider
//!
//! The only non-determinism the composer admits: synthesizing a document
//! number and a validity period when the caller leaves them unset. It is
//! always passed in explicitly, never read from global state.
//!
//! Every `rand::Rng` is a [`RandomSource`], so a seeded
//! `rand::rngs::StdRng` gives reproducible passports and
//! `rand::thread_rng()` gives fresh ones.

use rand::Rng;

/// Characters a synthesized document number is drawn from.
pub const ALPHANUMERIC: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Source of the random values used for unset optional document fields.
pub trait RandomSource {
    /// `len` characters drawn uniformly from [`ALPHANUMERIC`].
    fn alphanumeric(&mut self, len: usize) -> String;

    /// A value in `low..=high`. Returns `low` when `low >= high`.
    fn int_in_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn alphanumeric(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(ALPHANUMERIC[self.gen_range(0..ALPHANUMERIC.len())]))
            .collect()
    }

    fn int_in_range(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }
}
