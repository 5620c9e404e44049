//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors related to the analyzer configuration (`AnalyzerConfig`)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// A result limit was configured as zero
  #[error("limits.{name} must be at least 1: actual={actual}")]
  InvalidLimit {
    /// Name of the offending limit
    name: &'static str,
    /// Configured value
    actual: usize,
  },

  /// The same word is listed as both positive and negative
  #[error("word is listed as both positive and negative: {word}")]
  ConflictingSentimentWord {
    /// The conflicting word
    word: String,
  },

  /// The configuration file could not be read
  #[error("failed to read config file: path={path:?}, error={source}")]
  Unreadable {
    /// Path that was read
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The configuration JSON could not be parsed
  #[error("failed to parse config JSON: {source}")]
  Parse {
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },
}

/// Unified error for every text model operation
///
/// All variants are recoverable: the caller reports them and carries on
/// with the model unchanged.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AnalyzerError {
  /// Nothing to work on: no text loaded, empty user input, or nothing left
  /// after stop-word filtering
  #[error("empty input: {reason}")]
  EmptyInput {
    /// What was empty
    reason: String,
  },

  /// A replace or search target does not occur in the text
  #[error("word not found: {word}")]
  NotFound {
    /// The missing word
    word: String,
  },

  /// A replacement that is not exactly one whitespace-free word
  #[error("not a single word: {word:?}")]
  InvalidWord {
    /// The rejected input
    word: String,
  },

  /// The bigram table has no successors for the word
  #[error("no suggestions after: {word}")]
  NoSuggestions {
    /// Word that was looked up
    word: String,
  },

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl AnalyzerError {
  /// Creates an `EmptyInput` error
  #[must_use]
  pub fn empty_input(reason: impl Into<String>) -> Self {
    Self::EmptyInput {
      reason: reason.into(),
    }
  }

  /// Creates a `NotFound` error
  #[must_use]
  pub fn not_found(word: impl Into<String>) -> Self {
    Self::NotFound { word: word.into() }
  }
}

/// Standard Result type alias for the wordscope crate
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
