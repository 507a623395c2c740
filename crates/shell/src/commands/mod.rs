//! The commands under the `musals` CLI.

pub mod msa;
pub mod pairwise;
pub mod revcomp;

use std::path::PathBuf;

use clap::Subcommand;

/// The subcommands of the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Globally align two sequences.
    Pairwise {
        /// The first sequence.
        x: String,

        /// The second sequence.
        y: String,
    },
    /// Progressively align two or more sequences.
    Msa {
        /// The sequences to align, in order. The first one is the reference.
        #[arg(required = true, num_args = 1..)]
        sequences: Vec<String>,

        /// Save the finished MSA to this path.
        #[arg(short('o'), long)]
        out_path: Option<PathBuf>,
    },
    /// Print the reverse complement of each sequence.
    Revcomp {
        /// The sequences to reverse-complement.
        #[arg(required = true, num_args = 1..)]
        sequences: Vec<String>,
    },
}

/// Upper-cases the input so that alignment is case-insensitive.
pub fn normalize(sequence: &str) -> String {
    sequence.trim().to_ascii_uppercase()
}
