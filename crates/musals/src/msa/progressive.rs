//! Progressive (star) alignment against a growing first row.

use crate::{aligner::PairwiseAlign, MsaError};

use super::{quality, Block, Msa, MultipleAlign};

/// A progressive multiple sequence aligner.
///
/// Sequences are added one at a time, in input order, by aligning each one
/// against the current first row of the alignment. This is a heuristic and
/// makes no claim of optimality for the multiple alignment.
///
/// The aligner holds no state between calls. Each call to `align_multiple`
/// builds and owns its own [`Block`].
#[derive(Clone, Copy, Debug)]
pub struct Progressive<'a, A: PairwiseAlign> {
    /// The pairwise aligner.
    aligner: &'a A,
}

impl<'a, A: PairwiseAlign> Progressive<'a, A> {
    /// Create a new progressive aligner.
    #[must_use]
    pub const fn new(aligner: &'a A) -> Self {
        Self { aligner }
    }

    /// The pairwise aligner.
    #[must_use]
    pub const fn aligner(&self) -> &'a A {
        self.aligner
    }

    /// Build the block for the given sequences without padding or scoring it.
    ///
    /// # Errors
    ///
    /// - If fewer than two sequences are given.
    pub fn build_block<S: AsRef<[u8]>>(&self, sequences: &[S]) -> Result<Block, MsaError> {
        let (first, rest) = match sequences {
            [first, rest @ ..] if !rest.is_empty() => (first, rest),
            _ => {
                return Err(MsaError::InsufficientInput {
                    found: sequences.len(),
                })
            }
        };

        let mut block = Block::new(first.as_ref(), self.aligner.gap());
        for (i, sequence) in rest.iter().enumerate() {
            let score = block.add_sequence(self.aligner, sequence.as_ref());
            ftlog::debug!(
                "Aligned sequence {} against the first row with score {score}. Block width is now {}.",
                i + 1,
                block.width()
            );
        }

        Ok(block)
    }
}

impl<A: PairwiseAlign> MultipleAlign for Progressive<'_, A> {
    fn align_multiple<S: AsRef<[u8]>>(&self, sequences: &[S]) -> Result<Msa, MsaError> {
        let mut block = self.build_block(sequences)?;
        block.pad();

        let gap = block.gap();
        let rows = block.into_rows();
        let score = quality::total_score(self.aligner, &rows);

        ftlog::info!(
            "Built an MSA of {} sequences with {} columns and a total score of {score}.",
            rows.len(),
            rows.first().map_or(0, Vec::len)
        );

        Ok(Msa::new(rows, gap, score))
    }
}
