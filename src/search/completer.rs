use super::index::FrequencyIndex;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// A token matching a prefix query, paired with its corpus count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub token: String,
    pub count: u64,
}

/// Every token of `index` starting with `prefix`, most frequent first.
///
/// The prefix is matched literally and case-sensitively; an empty prefix
/// matches every token. Equal counts are ordered by ascending token, which
/// falls out of sorting stably over the index's lexicographic scan.
pub fn rank(index: &FrequencyIndex, prefix: &str) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = index
        .prefix_iter(prefix)
        .map(|(token, count)| Candidate {
            token: token.to_string(),
            count,
        })
        .collect();

    candidates.sort_by_key(|candidate| Reverse(candidate.count));
    candidates
}

/// The `limit` most frequent tokens starting with `prefix`.
///
/// Returns fewer than `limit` tokens when fewer match, and nothing at all for
/// a zero limit or a prefix no token starts with.
pub fn complete(index: &FrequencyIndex, prefix: &str, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let mut candidates = rank(index, prefix);
    tracing::debug!("Prefix {:?}: {} candidates", prefix, candidates.len());

    candidates.truncate(limit);
    candidates
        .into_iter()
        .map(|candidate| candidate.token)
        .collect()
}
