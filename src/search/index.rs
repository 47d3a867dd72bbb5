//! Word Frequency Index
//!
//! Immutable token -> occurrence count mapping built once from a corpus.
//! Entries are kept in an ordered map so prefix lookups become range scans
//! and iteration order is ascending lexicographic.

use super::tokenizer::tokenize;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Occurrence counts for every distinct token of a corpus.
///
/// There is no way to mutate an index once `build` has returned, which is what
/// makes it safe to share behind an `Arc` across request handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyIndex {
    counts: BTreeMap<String, u64>,
    total_tokens: u64,
}

impl FrequencyIndex {
    /// Counts the occurrences of each distinct token.
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut total_tokens = 0u64;

        for token in tokens {
            counts
                .entry(token.into())
                .and_modify(|count| *count += 1)
                .or_insert(1);
            total_tokens += 1;
        }

        tracing::debug!(
            "Built frequency index: {} distinct of {} tokens",
            counts.len(),
            total_tokens
        );

        Self {
            counts,
            total_tokens,
        }
    }

    /// Tokenizes `text` and builds an index from the result.
    pub fn from_corpus(text: &str) -> Self {
        Self::build(tokenize(text))
    }

    pub fn count(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens the index was built from.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// All `(token, count)` entries in ascending token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Entries whose token starts with `prefix`, in ascending token order.
    ///
    /// Every token sharing the prefix sorts at or after the prefix itself and
    /// they are contiguous, so the scan stops at the first non-match.
    pub fn prefix_iter<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, u64)> + 'a {
        self.counts
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(token, _)| token.starts_with(prefix))
            .map(|(token, count)| (token.as_str(), *count))
    }
}
