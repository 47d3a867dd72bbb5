use crate::search::index::FrequencyIndex;
use std::path::PathBuf;

/// Failure to obtain the corpus at startup.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read corpus file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Size summary of a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusStats {
    pub total_tokens: u64,
    pub distinct_tokens: usize,
}

impl From<&FrequencyIndex> for CorpusStats {
    fn from(index: &FrequencyIndex) -> Self {
        Self {
            total_tokens: index.total_tokens(),
            distinct_tokens: index.len(),
        }
    }
}
