//! Scoring scheme for the Needleman-Wunsch aligner.

/// A linear scoring scheme for global alignment.
///
/// Identical characters earn `match_score`, differing characters earn
/// `mismatch_score`, and every gap column earns `gap_penalty`. There is no
/// distinction between opening and extending a gap.
///
/// The defaults are `+1` for a match, `-1` for a mismatch and `-2` for a gap.
/// Nothing requires `match_score > mismatch_score`. Any `i32` is accepted;
/// alignment scores saturate at the bounds of `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "disk-io",
    derive(bitcode::Encode, bitcode::Decode, serde::Serialize, serde::Deserialize)
)]
pub struct ScoringScheme {
    /// The score for aligning two identical characters.
    match_score: i32,
    /// The score for aligning two different characters.
    mismatch_score: i32,
    /// The score for aligning a character against a gap.
    gap_penalty: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::new(1, -1, -2)
    }
}

impl ScoringScheme {
    /// Create a new scoring scheme.
    ///
    /// # Arguments
    ///
    /// * `match_score`: The score for two identical characters.
    /// * `mismatch_score`: The score for two different characters.
    /// * `gap_penalty`: The score for a character against a gap. This is
    ///   usually negative.
    #[must_use]
    pub const fn new(match_score: i32, mismatch_score: i32, gap_penalty: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }

    /// Set the score for two identical characters.
    #[must_use]
    pub const fn with_match_score(mut self, score: i32) -> Self {
        self.match_score = score;
        self
    }

    /// Set the score for two different characters.
    #[must_use]
    pub const fn with_mismatch_score(mut self, score: i32) -> Self {
        self.mismatch_score = score;
        self
    }

    /// Set the score for a character against a gap.
    #[must_use]
    pub const fn with_gap_penalty(mut self, penalty: i32) -> Self {
        self.gap_penalty = penalty;
        self
    }

    /// The score for two identical characters.
    #[must_use]
    pub const fn match_score(&self) -> i32 {
        self.match_score
    }

    /// The score for two different characters.
    #[must_use]
    pub const fn mismatch_score(&self) -> i32 {
        self.mismatch_score
    }

    /// The score for a character against a gap.
    #[must_use]
    pub const fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }

    /// The score for aligning `a` against `b`.
    ///
    /// Characters are compared byte-for-byte, so any character outside the
    /// expected alphabet (including the gap character) is an ordinary symbol.
    #[must_use]
    pub const fn sub_score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScoringScheme;

    #[test]
    fn defaults() {
        let scoring = ScoringScheme::default();
        assert_eq!(scoring.match_score(), 1);
        assert_eq!(scoring.mismatch_score(), -1);
        assert_eq!(scoring.gap_penalty(), -2);
    }

    #[test]
    fn builders() {
        let scoring = ScoringScheme::default()
            .with_match_score(5)
            .with_mismatch_score(-4)
            .with_gap_penalty(-8);
        assert_eq!(scoring, ScoringScheme::new(5, -4, -8));

        assert_eq!(scoring.sub_score(b'A', b'A'), 5);
        assert_eq!(scoring.sub_score(b'A', b'C'), -4);
        assert_eq!(scoring.sub_score(b'-', b'-'), 5);
        assert_eq!(scoring.sub_score(b'a', b'A'), -4);
    }
}
