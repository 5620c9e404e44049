//! wordscope text analysis library
//!
//! Loads a block of text once, indexes it, and answers interactive queries:
//! word and character statistics, positional search, word replacement,
//! autocomplete, next-word prediction, spelling suggestions, sentiment,
//! keyword extraction and word-cloud weighting.

/// Analysis module - frequency tables, bigrams, edit candidates, sentiment lexicon
pub mod analysis;

/// Configuration module - AnalyzerConfig word lists and result limits
pub mod config;

/// Error module - AnalyzerError, ConfigError, AnalyzerResult
pub mod errors;

/// Data model module - report types returned by TextModel
pub mod models;

/// Text model module - the TextModel facade owning all state
pub mod text_model;

/// Tokenizer module - case folding, punctuation stripping, sentence splitting
pub mod tokenizer;

/// Re-exports
pub use config::AnalyzerConfig;
pub use errors::{AnalyzerError, AnalyzerResult, ConfigError};
pub use text_model::TextModel;
