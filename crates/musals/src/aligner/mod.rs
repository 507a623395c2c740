//! Needleman-Wunsch algorithm for global sequence alignment.

mod ops;
mod scoring;

pub use ops::{Alignment, Direction};
pub use scoring::ScoringScheme;

use crate::GAP;

/// A table of scores between prefixes of two sequences.
///
/// The value at `(i, j)` is the best score for aligning the first `i`
/// characters of the first sequence against the first `j` characters of the
/// second, along with the move that produced it.
pub type NwTable = Vec<Vec<(i32, Direction)>>;

/// Global alignment of two sequences.
///
/// This is the contract the progressive aligner relies on. An implementation
/// backed by some other tool can stand in for [`Aligner`] as long as it
/// reports the gap indices of each sequence along with the aligned sequences.
pub trait PairwiseAlign {
    /// The gap character inserted into aligned sequences.
    fn gap(&self) -> u8;

    /// The scoring scheme used for alignment.
    fn scoring(&self) -> &ScoringScheme;

    /// Globally align two sequences.
    fn align(&self, x: &[u8], y: &[u8]) -> Alignment;

    /// The score of the global alignment of two sequences.
    fn score(&self, x: &[u8], y: &[u8]) -> i32 {
        self.align(x, y).score()
    }
}

/// A Needleman-Wunsch aligner with linear gap penalties.
///
/// This works with any sequence of bytes, and also provides helpers for working
/// with strings.
///
/// When several alignments share the optimal score, the traceback prefers a
/// diagonal move, then an up move (a gap in the second sequence), then a left
/// move (a gap in the first sequence). This order makes the output
/// deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aligner {
    /// The scoring scheme for the alignment.
    scoring: ScoringScheme,
    /// The gap character.
    gap: u8,
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new(ScoringScheme::default(), GAP)
    }
}

impl Aligner {
    /// Create a new Needleman-Wunsch aligner.
    #[must_use]
    pub const fn new(scoring: ScoringScheme, gap: u8) -> Self {
        Self { scoring, gap }
    }

    /// Create a new aligner with the default gap character.
    #[must_use]
    pub const fn with_scoring(scoring: ScoringScheme) -> Self {
        Self::new(scoring, GAP)
    }

    /// Read the final score from a DP table.
    #[must_use]
    pub fn table_score(table: &NwTable) -> i32 {
        table.last().and_then(|row| row.last()).map_or(0, |&(s, _)| s)
    }

    /// Compute the dynamic programming table for the Needleman-Wunsch algorithm.
    ///
    /// The table has `x.len() + 1` rows and `y.len() + 1` columns. Row 0 and
    /// column 0 hold the cumulative gap penalties of aligning a prefix against
    /// nothing.
    ///
    /// This implementation maximizes the score. Scores saturate at the bounds
    /// of `i32` instead of overflowing.
    ///
    /// # Arguments
    ///
    /// * `x` - The first sequence.
    /// * `y` - The second sequence.
    ///
    /// # Returns
    ///
    /// The DP table.
    pub fn dp_table<S: AsRef<[u8]>>(&self, x: &S, y: &S) -> NwTable {
        let (x, y) = (x.as_ref(), y.as_ref());
        let gap_penalty = self.scoring.gap_penalty();

        // Initialize the DP table.
        let mut table: NwTable = vec![vec![(0, Direction::Diagonal); y.len() + 1]; x.len() + 1];

        // Initialize the first row to the cost of gaps in the first sequence.
        for j in 1..table[0].len() {
            let score = table[0][j - 1].0.saturating_add(gap_penalty);
            table[0][j] = (score, Direction::Left);
        }

        // Initialize the first column to the cost of gaps in the second
        // sequence.
        for i in 1..table.len() {
            let score = table[i - 1][0].0.saturating_add(gap_penalty);
            table[i][0] = (score, Direction::Up);
        }

        // Fill in the DP table.
        // On iteration (i, j), we will fill in the cell at (i + 1, j + 1).
        for (i, &xc) in x.iter().enumerate() {
            for (j, &yc) in y.iter().enumerate() {
                let diag_score = table[i][j].0.saturating_add(self.scoring.sub_score(xc, yc));
                let up_score = table[i][j + 1].0.saturating_add(gap_penalty);
                let left_score = table[i + 1][j].0.saturating_add(gap_penalty);

                // Ties go to the diagonal, then up, then left.
                table[i + 1][j + 1] = if diag_score >= up_score && diag_score >= left_score {
                    (diag_score, Direction::Diagonal)
                } else if up_score >= left_score {
                    (up_score, Direction::Up)
                } else {
                    (left_score, Direction::Left)
                };
            }
        }

        table
    }

    /// Trace back through a DP table to recover the alignment.
    ///
    /// # Arguments
    ///
    /// * `x` - The first sequence.
    /// * `y` - The second sequence.
    /// * `table` - The DP table computed by `dp_table` for `x` and `y`.
    ///
    /// # Returns
    ///
    /// The alignment of the two sequences.
    pub fn trace_back<S: AsRef<[u8]>>(&self, x: &S, y: &S, table: &NwTable) -> Alignment {
        let (x, y) = (x.as_ref(), y.as_ref());
        let [mut row_i, mut col_i] = [x.len(), y.len()];
        let [mut x_aligned, mut y_aligned] = [
            Vec::with_capacity(x.len() + y.len()),
            Vec::with_capacity(x.len() + y.len()),
        ];
        let [mut x_gaps, mut y_gaps] = [Vec::new(), Vec::new()];

        while row_i > 0 || col_i > 0 {
            match table[row_i][col_i].1 {
                Direction::Diagonal => {
                    x_aligned.push(x[row_i - 1]);
                    y_aligned.push(y[col_i - 1]);
                    row_i -= 1;
                    col_i -= 1;
                }
                Direction::Up => {
                    x_aligned.push(x[row_i - 1]);
                    y_aligned.push(self.gap);
                    y_gaps.push(col_i);
                    row_i -= 1;
                }
                Direction::Left => {
                    x_aligned.push(self.gap);
                    y_aligned.push(y[col_i - 1]);
                    x_gaps.push(row_i);
                    col_i -= 1;
                }
            }
        }

        x_aligned.reverse();
        y_aligned.reverse();
        x_gaps.reverse();
        y_gaps.reverse();

        Alignment::new(Self::table_score(table), [x_aligned, y_aligned], [x_gaps, y_gaps])
    }

    /// Align two strings using the Needleman-Wunsch algorithm.
    pub fn align_str<S: AsRef<str>>(&self, x: &S, y: &S) -> (i32, [String; 2]) {
        let alignment = self.align(x.as_ref().as_bytes(), y.as_ref().as_bytes());
        (alignment.score(), alignment.strings())
    }

    /// Returns the indices where gaps need to be inserted to align two
    /// sequences.
    pub fn alignment_gaps<S: AsRef<[u8]>>(&self, x: &S, y: &S) -> [Vec<usize>; 2] {
        let (_, _, gaps) = self.align(x.as_ref(), y.as_ref()).into_parts();
        gaps
    }
}

impl PairwiseAlign for Aligner {
    fn gap(&self) -> u8 {
        self.gap
    }

    fn scoring(&self) -> &ScoringScheme {
        &self.scoring
    }

    fn align(&self, x: &[u8], y: &[u8]) -> Alignment {
        let table = self.dp_table(&x, &y);
        self.trace_back(&x, &y, &table)
    }

    fn score(&self, x: &[u8], y: &[u8]) -> i32 {
        Self::table_score(&self.dp_table(&x, &y))
    }
}
