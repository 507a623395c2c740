//! Data generation utilities for testing.

use rand::prelude::*;

/// The alphabet for generated sequences.
const NUCLEOTIDES: &[u8] = b"ACGT";

/// A random sequence of nucleotides.
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())])
        .collect()
}

/// Random sequences whose lengths lie in `min_len..=max_len`.
pub fn random_sequences<R: Rng>(rng: &mut R, count: usize, min_len: usize, max_len: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            random_sequence(rng, len)
        })
        .collect()
}
