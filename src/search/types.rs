use serde::{Deserialize, Serialize};

/// Query string of the autocomplete endpoint.
#[derive(Debug, Default)]
pub struct AutocompleteParams {
    pub term: Option<String>,
}

impl AutocompleteParams {
    /// Picks the parameters out of decoded query pairs. A repeated `term`
    /// keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let term = pairs
            .into_iter()
            .find(|(key, _)| key == "term")
            .map(|(_, value)| value);
        Self { term }
    }
}

/// Successful autocomplete response: tokens in ranked order.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<String>,
}

/// Error body returned for rejected requests and internal failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
