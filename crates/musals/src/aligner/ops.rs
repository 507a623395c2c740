//! Alignment operations and results for the Needleman-Wunsch algorithm.

/// The direction of the move into a cell of the DP table.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Direction {
    /// Diagonal (Up and Left) for a match or substitution.
    Diagonal,
    /// Up for a character of the first sequence against a gap in the second.
    Up,
    /// Left for a gap in the first sequence against a character of the second.
    Left,
}

/// A global alignment of two sequences.
///
/// Holds the optimal score, both sequences with gaps inserted, and, for each
/// sequence, the indices at which those gaps were inserted.
///
/// Gap indices are in the coordinates of the *unaligned* sequence and are
/// non-decreasing. An index `k` means "insert a gap before the character at
/// `k`", and `k == len` means "append a gap". Repeated indices mean several
/// gaps at the same place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// The alignment score.
    score: i32,
    /// The two sequences with gaps inserted.
    aligned: [Vec<u8>; 2],
    /// The indices at which gaps were inserted into each sequence.
    gaps: [Vec<usize>; 2],
}

impl Alignment {
    /// Create a new alignment.
    ///
    /// # Arguments
    ///
    /// * `score`: The alignment score.
    /// * `aligned`: The two sequences with gaps inserted. These must have
    ///   equal lengths.
    /// * `gaps`: The indices at which gaps were inserted into each of the
    ///   unaligned sequences.
    #[must_use]
    pub const fn new(score: i32, aligned: [Vec<u8>; 2], gaps: [Vec<usize>; 2]) -> Self {
        Self { score, aligned, gaps }
    }

    /// The alignment score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// The two aligned sequences.
    #[must_use]
    pub fn aligned(&self) -> [&[u8]; 2] {
        [&self.aligned[0], &self.aligned[1]]
    }

    /// The gap insertion indices for each of the unaligned sequences.
    #[must_use]
    pub fn gaps(&self) -> [&[usize]; 2] {
        [&self.gaps[0], &self.gaps[1]]
    }

    /// The number of columns in the alignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned[0].len()
    }

    /// Whether both aligned sequences are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned[0].is_empty()
    }

    /// The aligned sequences as `String`s.
    ///
    /// Any bytes that are not valid `utf-8` are replaced.
    #[must_use]
    pub fn strings(&self) -> [String; 2] {
        [
            String::from_utf8_lossy(&self.aligned[0]).into_owned(),
            String::from_utf8_lossy(&self.aligned[1]).into_owned(),
        ]
    }

    /// Swap the roles of the two sequences.
    #[must_use]
    pub fn swap(self) -> Self {
        let [x, y] = self.aligned;
        let [x_gaps, y_gaps] = self.gaps;
        Self {
            score: self.score,
            aligned: [y, x],
            gaps: [y_gaps, x_gaps],
        }
    }

    /// Consume the alignment and return its score, aligned sequences and gap
    /// indices.
    #[must_use]
    pub fn into_parts(self) -> (i32, [Vec<u8>; 2], [Vec<usize>; 2]) {
        (self.score, self.aligned, self.gaps)
    }
}
