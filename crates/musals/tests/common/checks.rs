//! Independent checks of alignment properties.

use musals::ScoringScheme;

/// Removes every gap from an aligned row.
pub fn strip_gaps(row: &[u8], gap: u8) -> Vec<u8> {
    row.iter().copied().filter(|&c| c != gap).collect()
}

/// Inserts a gap before each index, with indices in the coordinates of the
/// unaligned row.
pub fn insert_gaps(row: &[u8], indices: &[usize], gap: u8) -> Vec<u8> {
    let mut gapped = row.to_vec();
    for &i in indices.iter().rev() {
        gapped.insert(i, gap);
    }
    gapped
}

/// Scores a pairwise alignment column by column.
pub fn column_score(x: &[u8], y: &[u8], scoring: &ScoringScheme, gap: u8) -> i32 {
    x.iter()
        .zip(y)
        .map(|(&a, &b)| {
            if a == gap || b == gap {
                scoring.gap_penalty()
            } else if a == b {
                scoring.match_score()
            } else {
                scoring.mismatch_score()
            }
        })
        .sum()
}

/// The best score over every possible global alignment, by exhaustive search.
///
/// This is exponential in the lengths, so only use it on short sequences.
pub fn brute_force_score(x: &[u8], y: &[u8], scoring: &ScoringScheme) -> i32 {
    match (x.split_first(), y.split_first()) {
        (None, None) => 0,
        (Some(_), None) => scoring.gap_penalty() * i32::try_from(x.len()).unwrap_or(i32::MAX),
        (None, Some(_)) => scoring.gap_penalty() * i32::try_from(y.len()).unwrap_or(i32::MAX),
        (Some((&a, x_rest)), Some((&b, y_rest))) => {
            let both = scoring.sub_score(a, b) + brute_force_score(x_rest, y_rest, scoring);
            let only_x = scoring.gap_penalty() + brute_force_score(x_rest, y, scoring);
            let only_y = scoring.gap_penalty() + brute_force_score(x, y_rest, scoring);
            both.max(only_x).max(only_y)
        }
    }
}

/// Whether every row has the same length.
pub fn is_rectangular(rows: &[Vec<u8>]) -> bool {
    rows.windows(2).all(|w| w[0].len() == w[1].len())
}
