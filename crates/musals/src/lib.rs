#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

pub mod aligner;
pub mod cache;
mod errors;
pub mod msa;
pub mod sequence;

pub use aligner::{Aligner, Alignment, PairwiseAlign, ScoringScheme};
pub use cache::AlignmentCache;
pub use errors::MsaError;
pub use msa::{MultipleAlign, Msa, Progressive};
pub use sequence::reverse_complement;

/// The default gap character.
pub const GAP: u8 = b'-';

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
