//! Build an MSA and print the pairwise report.

use std::path::Path;

use musals::{Aligner, MultipleAlign, Progressive};

use super::normalize;

/// Aligns the sequences in order and prints the pairwise report, the total
/// score and the aligned rows.
///
/// # Errors
///
/// - If fewer than two sequences are given.
/// - If the MSA could not be written to `out_path`.
pub fn run(aligner: &Aligner, sequences: &[String], out_path: Option<&Path>) -> Result<(), String> {
    let sequences = sequences.iter().map(|s| normalize(s)).collect::<Vec<_>>();
    ftlog::info!("Aligning {} sequences...", sequences.len());

    let msa = Progressive::new(aligner)
        .align_multiple(&sequences)
        .map_err(|e| e.to_string())?;
    let rows = msa.strings();

    println!("Pairwise Alignments and Scores:");
    for (i, j, score) in msa.pairwise_scores(aligner) {
        println!("{} vs {} => Score: {score}", rows[i], rows[j]);
    }

    println!();
    println!("Final MSA Score: {}", msa.score());
    println!("Aligned Sequences:");
    for row in &rows {
        println!("{row}");
    }

    if let Some(path) = out_path {
        ftlog::info!("Writing MSA to {path:?}...");
        msa.write_to(path).map_err(|e| e.to_string())?;
    }

    Ok(())
}
