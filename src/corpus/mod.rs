//! Corpus Module
//!
//! Acquires the text the frequency index is built from.
//!
//! ## Workflow
//! 1. **Read**: Loads the corpus file named on the command line.
//! 2. **Decode**: Converts the bytes to text (lossy, since non-letters are dropped later anyway).
//! 3. **Report**: Summarizes the resulting index as `CorpusStats` for startup logging.
//!
//! A corpus that cannot be read is fatal: no index means nothing can be served.

pub mod loader;
pub mod types;

pub use loader::load_corpus;
pub use types::{CorpusError, CorpusStats};
