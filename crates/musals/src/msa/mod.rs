//! Progressive multiple sequence alignment.

mod block;
mod progressive;
mod quality;

use core::ops::Index;

use crate::{aligner::PairwiseAlign, MsaError};

pub use block::Block;
pub use progressive::Progressive;

/// Multiple alignment of two or more sequences.
///
/// This is the contract for anything that turns a list of sequences into an
/// [`Msa`]. [`Progressive`] implements it on top of any [`PairwiseAlign`].
pub trait MultipleAlign {
    /// Align the given sequences.
    ///
    /// # Errors
    ///
    /// - If fewer than two sequences are given.
    fn align_multiple<S: AsRef<[u8]>>(&self, sequences: &[S]) -> Result<Msa, MsaError>;
}

/// A multiple sequence alignment (MSA).
///
/// All rows have the same length and each column holds homologous positions
/// across the input sequences. The score is the sum, over all pairs of rows,
/// of the score of re-aligning that pair from scratch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "disk-io",
    derive(bitcode::Encode, bitcode::Decode, serde::Serialize, serde::Deserialize)
)]
#[must_use]
pub struct Msa {
    /// The aligned sequences.
    rows: Vec<Vec<u8>>,
    /// The gap character.
    gap: u8,
    /// The total score.
    score: i32,
}

impl Msa {
    /// Create a new MSA from rows of equal length.
    pub(crate) const fn new(rows: Vec<Vec<u8>>, gap: u8, score: i32) -> Self {
        Self { rows, gap, score }
    }

    /// Creates an MSA from rows that were aligned elsewhere.
    ///
    /// The total score is computed the same way as for a progressive
    /// alignment, by re-aligning every pair of rows with `aligner`.
    ///
    /// # Errors
    ///
    /// - If fewer than two rows are given.
    /// - If the rows have different lengths.
    pub fn from_aligned<A: PairwiseAlign>(aligner: &A, rows: Vec<Vec<u8>>) -> Result<Self, MsaError> {
        if rows.len() < 2 {
            return Err(MsaError::InsufficientInput { found: rows.len() });
        }

        let expected = rows[0].len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != expected) {
            return Err(MsaError::UnequalLengths {
                index,
                len: row.len(),
                expected,
            });
        }

        let score = quality::total_score(aligner, &rows);
        Ok(Self::new(rows, aligner.gap(), score))
    }

    /// The aligned sequences.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// The gap character.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// The total score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// The number of sequences in the MSA.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the MSA has no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The number of columns in the MSA.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The aligned sequences as strings.
    ///
    /// Any bytes that are not valid `utf-8` are replaced.
    #[must_use]
    pub fn strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .collect()
    }

    /// Consume the MSA and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}

#[cfg(feature = "disk-io")]
impl Msa {
    /// Writes the MSA to the given path using `bitcode`.
    ///
    /// # Errors
    ///
    /// - If the file could not be written.
    pub fn write_to<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), MsaError> {
        let contents = bitcode::encode(self);
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Reads an MSA from the given path using `bitcode`.
    ///
    /// # Errors
    ///
    /// - If the file could not be read.
    /// - If the contents could not be decoded.
    pub fn read_from<P: AsRef<std::path::Path>>(path: P) -> Result<Self, MsaError> {
        let contents = std::fs::read(path)?;
        Ok(bitcode::decode(&contents)?)
    }
}

impl Index<usize> for Msa {
    type Output = [u8];

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}
