//! Reverse-complement sequences and print them.

/// Prints the reverse complement of each sequence on its own line.
///
/// The input is used as given, without upper-casing, so any symbol other than
/// a nucleotide keeps its case.
pub fn run(sequences: &[String]) {
    ftlog::info!("Reverse-complementing {} sequences...", sequences.len());

    for sequence in sequences {
        let reversed = musals::reverse_complement(sequence.trim().as_bytes());
        println!("{}", String::from_utf8_lossy(&reversed));
    }
}
