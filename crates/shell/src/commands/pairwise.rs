//! Align two sequences and print the result.

use musals::Aligner;

use super::normalize;

/// Aligns `x` against `y` and prints both aligned rows followed by the score.
pub fn run(aligner: &Aligner, x: &str, y: &str) {
    let (x, y) = (normalize(x), normalize(y));
    ftlog::info!("Aligning {} against {}...", x.len(), y.len());

    let (score, [x_aligned, y_aligned]) = aligner.align_str(&x, &y);

    println!("{x_aligned}");
    println!("{y_aligned}");
    println!("Score: {score}");
}
