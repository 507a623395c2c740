//! Quality metrics for MSAs.

use crate::aligner::{PairwiseAlign, ScoringScheme};

use super::Msa;

impl Msa {
    /// Re-aligns every pair of rows from scratch and reports their scores.
    ///
    /// The gapped rows are aligned as-is, so gap characters are treated as
    /// ordinary characters and the re-alignment may add further gaps. This is
    /// the pairwise view behind the total score of a progressive alignment.
    ///
    /// # Returns
    ///
    /// For each pair of rows `i < j`, the tuple `(i, j, score)`, ordered by
    /// `i` and then by `j`.
    #[must_use]
    pub fn pairwise_scores<A: PairwiseAlign>(&self, aligner: &A) -> Vec<(usize, usize, i32)> {
        realigned_pairs(aligner, &self.rows).collect()
    }

    /// Scores the fixed columns of the MSA as a sum of pairs.
    ///
    /// Unlike the total score, this does not re-align anything. For each pair
    /// of rows and each column, a character against a gap scores the gap
    /// penalty, two gaps score nothing, and two characters score a match or
    /// a mismatch.
    #[must_use]
    pub fn sum_of_pairs(&self, scoring: &ScoringScheme) -> i32 {
        let gap = self.gap;
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, s1)| self.rows.iter().skip(i + 1).map(move |s2| (s1, s2)))
            .map(|(s1, s2)| {
                s1.iter().zip(s2.iter()).fold(0_i32, |score, (&a, &b)| {
                    if a == gap && b == gap {
                        score
                    } else if a == gap || b == gap {
                        score.saturating_add(scoring.gap_penalty())
                    } else {
                        score.saturating_add(scoring.sub_score(a, b))
                    }
                })
            })
            .fold(0, i32::saturating_add)
    }
}

/// The saturating sum of the scores of every pair of rows.
pub(crate) fn total_score<A: PairwiseAlign>(aligner: &A, rows: &[Vec<u8>]) -> i32 {
    realigned_pairs(aligner, rows)
        .map(|(_, _, score)| score)
        .fold(0, i32::saturating_add)
}

/// Re-aligns every pair of rows and yields `(i, j, score)` for `i < j`.
pub(crate) fn realigned_pairs<'a, A: PairwiseAlign>(
    aligner: &'a A,
    rows: &'a [Vec<u8>],
) -> impl Iterator<Item = (usize, usize, i32)> + 'a {
    (0..rows.len()).flat_map(move |i| ((i + 1)..rows.len()).map(move |j| (i, j, aligner.score(&rows[i], &rows[j]))))
}
