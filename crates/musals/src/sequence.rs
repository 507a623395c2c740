//! Helpers for working with nucleotide sequences.

/// The complement of a single nucleotide.
///
/// `A`, `C`, `G` and `T` are matched in either case and complemented to
/// lowercase. Any other byte, including a gap, comes back unchanged.
#[must_use]
pub const fn complement(base: u8) -> u8 {
    match base.to_ascii_lowercase() {
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        _ => base,
    }
}

/// The reverse complement of a DNA sequence.
///
/// Each base is complemented with [`complement`] and the result is reversed,
/// so the output is lowercase wherever the input held a nucleotide.
///
/// # Examples
///
/// ```rust
/// use musals::reverse_complement;
///
/// assert_eq!(reverse_complement(b"AACGn"), b"ncgtt");
/// ```
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().copied().map(complement).collect()
}
