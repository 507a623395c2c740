//! Errors raised while building or persisting alignments.

/// The ways a multiple sequence alignment can fail.
///
/// Pairwise alignment is total and never fails, so every variant here belongs
/// to the multiple alignment or to its persistence.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MsaError {
    /// Fewer than two sequences were given to a multiple alignment.
    #[error("At least two sequences are required for a multiple alignment, but {found} were given.")]
    InsufficientInput {
        /// The number of sequences that were given.
        found: usize,
    },
    /// Pre-aligned rows did not all have the same length.
    #[error("Aligned rows must have equal lengths: row {index} has length {len} but row 0 has length {expected}.")]
    UnequalLengths {
        /// The index of the offending row.
        index: usize,
        /// The length of the offending row.
        len: usize,
        /// The length of the first row.
        expected: usize,
    },
    /// Reading or writing an MSA file failed.
    #[cfg(feature = "disk-io")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// An MSA file could not be decoded.
    #[cfg(feature = "disk-io")]
    #[error("Failed to decode MSA: {0}")]
    Decode(#[from] bitcode::Error),
}
