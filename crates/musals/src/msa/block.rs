//! The working block of a progressive alignment.

use crate::aligner::PairwiseAlign;

/// The rows of a partial MSA.
///
/// Row 0 is the reference row against which every new sequence is aligned.
/// After each call to `add_sequence`, all rows have the same length.
#[derive(Clone, Debug)]
#[must_use]
pub struct Block {
    /// The aligned rows.
    rows: Vec<Vec<u8>>,
    /// The gap character.
    gap: u8,
}

impl Block {
    /// Create a new block holding a single sequence.
    ///
    /// # Arguments
    ///
    /// * `first` - The sequence that seeds the block.
    /// * `gap` - The character to use for the gap.
    pub fn new(first: &[u8], gap: u8) -> Self {
        Self {
            rows: vec![first.to_vec()],
            gap,
        }
    }

    /// The gap character.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// The number of rows in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the block has no rows.
    ///
    /// A block built with `new` always has at least one row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The length of the longest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The rows of the block.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Whether every row has the same length.
    #[must_use]
    pub fn is_rectangular(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].len() == w[1].len())
    }

    /// Align a new sequence against row 0 and add it to the block.
    ///
    /// Gaps that the alignment inserts into row 0 are inserted at the same
    /// positions in every other row so that columns stay in correspondence.
    /// The aligned sequence is appended as the last row.
    ///
    /// # Returns
    ///
    /// The score of the pairwise alignment against row 0.
    pub fn add_sequence<A: PairwiseAlign>(&mut self, aligner: &A, sequence: &[u8]) -> i32 {
        let (score, [first, new_row], [first_gaps, _]) = aligner.align(&self.rows[0], sequence).into_parts();

        if !first_gaps.is_empty() {
            ftlog::trace!(
                "Propagating {} new gap(s) into {} row(s).",
                first_gaps.len(),
                self.rows.len() - 1
            );
            let gap = self.gap;
            for row in self.rows.iter_mut().skip(1) {
                *row = insert_gaps(row, &first_gaps, gap);
            }
        }

        self.rows[0] = first;
        self.rows.push(new_row);

        debug_assert!(self.is_rectangular(), "Rows have different lengths after adding a sequence.");

        score
    }

    /// Pad every row on the right with gaps up to the length of the longest
    /// row.
    pub fn pad(&mut self) {
        let width = self.width();
        let gap = self.gap;
        for row in &mut self.rows {
            row.resize(width, gap);
        }
    }

    /// Consume the block and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}

/// Insert gaps into a row in a single pass.
///
/// # Arguments
///
/// * `row` - The row to insert gaps into.
/// * `indices` - Non-decreasing positions, in the coordinates of `row` before
///   any insertion, before which to insert a gap. Positions equal to the row
///   length append gaps at the end.
/// * `gap` - The gap character.
pub(crate) fn insert_gaps(row: &[u8], indices: &[usize], gap: u8) -> Vec<u8> {
    let mut gapped = Vec::with_capacity(row.len() + indices.len());
    let mut pending = indices.iter().copied().peekable();

    for (i, &c) in row.iter().enumerate() {
        while pending.next_if(|&g| g == i).is_some() {
            gapped.push(gap);
        }
        gapped.push(c);
    }
    gapped.extend(pending.map(|_| gap));

    gapped
}
