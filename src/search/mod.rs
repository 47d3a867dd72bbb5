//! Autocomplete Search Module
//!
//! The core of the service: turning a corpus into a word-frequency index and
//! answering prefix queries against it.
//!
//! ## Pipeline
//! raw corpus text -> `tokenizer` -> token stream -> `index` (built once,
//! read-only afterwards) -> `completer` (per query) -> ranked tokens ->
//! `handlers` (HTTP).
//!
//! ## Submodules
//! - **`tokenizer`**: Normalizes text into lowercase alphabetic tokens.
//! - **`index`**: The immutable `FrequencyIndex` (token -> occurrence count).
//! - **`completer`**: Prefix matching, frequency ranking and truncation.
//! - **`handlers`**: The Axum router and `/autocomplete` handler.
//! - **`types`**: Data Transfer Objects (DTOs) for the HTTP API.

pub mod completer;
pub mod handlers;
pub mod index;
pub mod tokenizer;
pub mod types;

pub use completer::{Candidate, complete, rank};
pub use index::FrequencyIndex;
pub use tokenizer::tokenize;
