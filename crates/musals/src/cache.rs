//! A caller-owned cache of finished alignments.

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    aligner::{PairwiseAlign, ScoringScheme},
    msa::{MultipleAlign, Progressive},
    Msa, MsaError,
};

/// Identifies a multiple alignment request by its contents.
///
/// Two requests share a key only if they have the same sequences in the same
/// order, the same scoring scheme and the same gap character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestKey {
    /// The unaligned sequences.
    sequences: Vec<Vec<u8>>,
    /// The scoring scheme.
    scoring: ScoringScheme,
    /// The gap character.
    gap: u8,
}

impl RequestKey {
    /// Create a key for aligning `sequences` with the given settings.
    #[must_use]
    pub fn new<S: AsRef<[u8]>>(sequences: &[S], scoring: ScoringScheme, gap: u8) -> Self {
        Self {
            sequences: sequences.iter().map(|s| s.as_ref().to_vec()).collect(),
            scoring,
            gap,
        }
    }

    /// Create a key for aligning `sequences` with the settings of `aligner`.
    #[must_use]
    pub fn for_aligner<A: PairwiseAlign, S: AsRef<[u8]>>(aligner: &A, sequences: &[S]) -> Self {
        Self::new(sequences, *aligner.scoring(), aligner.gap())
    }
}

/// Remembers finished MSAs so that repeated requests are not recomputed.
///
/// The cache has no global lifetime. Whoever creates it owns it and decides
/// when to clear it.
#[derive(Clone, Debug, Default)]
pub struct AlignmentCache {
    /// The finished alignments.
    entries: HashMap<RequestKey, Msa>,
    /// The number of requests answered from the cache.
    hits: usize,
    /// The number of requests that had to be computed.
    misses: usize,
}

impl AlignmentCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached MSA for the request, building it with a
    /// [`Progressive`] aligner on a miss.
    ///
    /// # Errors
    ///
    /// - If fewer than two sequences are given. Failed requests are not
    ///   cached.
    pub fn get_or_align<A: PairwiseAlign, S: AsRef<[u8]>>(
        &mut self,
        aligner: &A,
        sequences: &[S],
    ) -> Result<&Msa, MsaError> {
        match self.entries.entry(RequestKey::for_aligner(aligner, sequences)) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                ftlog::debug!("Cache hit for {} sequences.", sequences.len());
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let msa = Progressive::new(aligner).align_multiple(sequences)?;
                self.misses += 1;
                ftlog::debug!("Cache miss for {} sequences.", sequences.len());
                Ok(entry.insert(msa))
            }
        }
    }

    /// Returns the cached MSA for the key, if any.
    #[must_use]
    pub fn get(&self, key: &RequestKey) -> Option<&Msa> {
        self.entries.get(key)
    }

    /// The number of cached MSAs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of requests answered from the cache.
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// The number of requests that had to be computed.
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }

    /// Remove every cached MSA and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
