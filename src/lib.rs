//! Prefix Autocomplete Service Library
//!
//! Builds a word-frequency index from a text corpus at startup and answers
//! prefix queries with the most frequent matching words. The binary
//! (`main.rs`) wires these modules into an HTTP service.
//!
//! ## Modules
//! - **`config`**: Command-line and environment configuration.
//! - **`corpus`**: Reading the corpus file; the only startup-fatal failure.
//! - **`search`**: Tokenizer, the immutable `FrequencyIndex`, the ranking
//!   completer and the HTTP handler in front of it.

pub mod config;
pub mod corpus;
pub mod search;
