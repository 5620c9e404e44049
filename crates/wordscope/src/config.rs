// crates/wordscope/src/config.rs

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Stop words excluded from keyword extraction and word-cloud weighting.
pub const DEFAULT_STOP_WORDS: &[&str] = &["the", "a", "is", "and", "of", "to", "in"];

/// Words that raise the sentiment score.
pub const DEFAULT_POSITIVE_WORDS: &[&str] =
  &["good", "happy", "great", "excellent", "love", "wonderful"];

/// Words that lower the sentiment score.
pub const DEFAULT_NEGATIVE_WORDS: &[&str] =
  &["bad", "sad", "terrible", "awful", "hate", "horrible"];

/// Top-level configuration for the text model.
///
/// Every field has a default, so an empty JSON object `{}` is a valid
/// configuration. Word lists are folded to lowercase when the model is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
  /// Words ignored by keyword extraction and the word cloud
  pub stop_words: HashSet<String>,
  /// Words counted as positive by sentiment analysis
  pub positive_words: HashSet<String>,
  /// Words counted as negative by sentiment analysis
  pub negative_words: HashSet<String>,
  /// [limits] section
  pub limits: LimitsConfig,
}

/// [limits] section: how many entries each report returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
  /// Most frequent words listed by word statistics
  pub top_words: usize,
  /// Autocomplete candidates
  pub autocomplete: usize,
  /// Next-word predictions
  pub predictions: usize,
  /// Spelling suggestions
  pub spelling: usize,
  /// Extracted keywords
  pub keywords: usize,
  /// Word-cloud entries
  pub word_cloud: usize,
}

impl Default for LimitsConfig {
  fn default() -> Self {
    Self {
      top_words: 10,
      autocomplete: 10,
      predictions: 3,
      spelling: 5,
      keywords: 10,
      word_cloud: 10,
    }
  }
}

impl Default for AnalyzerConfig {
  fn default() -> Self {
    Self {
      stop_words: word_set(DEFAULT_STOP_WORDS),
      positive_words: word_set(DEFAULT_POSITIVE_WORDS),
      negative_words: word_set(DEFAULT_NEGATIVE_WORDS),
      limits: LimitsConfig::default(),
    }
  }
}

fn word_set(words: &[&str]) -> HashSet<String> {
  words.iter().map(|w| (*w).to_string()).collect()
}

impl AnalyzerConfig {
  /// Parses a configuration from a JSON string.
  ///
  /// Missing fields fall back to their defaults. The result is validated.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
      source: Arc::new(e),
    })?;
    config.validate()?;
    Ok(config)
  }

  /// Reads and parses a JSON configuration file.
  ///
  /// # Errors
  /// - `ConfigError::Unreadable` if the file cannot be read
  /// - `ConfigError::Parse` if the JSON is malformed
  /// - any validation error from [`validate`](Self::validate)
  pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_json_str(&content)
  }

  /// Replaces the stop-word set.
  #[must_use]
  pub fn with_stop_words<I, S>(mut self, words: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.stop_words = words.into_iter().map(Into::into).collect();
    self
  }

  /// Replaces the positive and negative sentiment word sets.
  #[must_use]
  pub fn with_sentiment_words<P, N, S>(mut self, positive: P, negative: N) -> Self
  where
    P: IntoIterator<Item = S>,
    N: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.positive_words = positive.into_iter().map(Into::into).collect();
    self.negative_words = negative.into_iter().map(Into::into).collect();
    self
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - every limit in `limits` is >= 1
  /// - no word is both positive and negative
  ///
  /// # Errors
  /// Returns the first failing check as a `ConfigError`.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let limits = [
      ("top_words", self.limits.top_words),
      ("autocomplete", self.limits.autocomplete),
      ("predictions", self.limits.predictions),
      ("spelling", self.limits.spelling),
      ("keywords", self.limits.keywords),
      ("word_cloud", self.limits.word_cloud),
    ];
    for (name, actual) in limits {
      if actual < 1 {
        return Err(ConfigError::InvalidLimit { name, actual });
      }
    }

    // sorted so the reported word does not depend on hash order
    let mut conflicts: Vec<&String> =
      self.positive_words.intersection(&self.negative_words).collect();
    conflicts.sort();
    if let Some(word) = conflicts.first() {
      return Err(ConfigError::ConflictingSentimentWord {
        word: (*word).clone(),
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
