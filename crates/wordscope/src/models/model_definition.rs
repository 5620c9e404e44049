//! Report models returned by `TextModel` operations
use std::fmt;

use serde::{Deserialize, Serialize};

/// A word with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
  /// The word
  pub word: String,
  /// Number of occurrences
  pub count: usize,
}

impl From<(String, usize)> for WordCount {
  fn from((word, count): (String, usize)) -> Self {
    Self { word, count }
  }
}

/// Word statistics report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
  /// Number of tokens
  pub total_words: usize,
  /// Number of distinct tokens
  pub unique_words: usize,
  /// Most frequent words, descending, ties in first-encounter order
  pub top_words: Vec<WordCount>,
}

/// Character statistics report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharStats {
  /// Characters across all tokens (whitespace excluded)
  pub total_chars: usize,
  /// Every character with its count, in first-encounter order
  pub frequencies: Vec<(char, usize)>,
}

/// Position of a search match, both indices 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
  /// Sentence number
  pub sentence: usize,
  /// Word number within the sentence
  pub word: usize,
}

/// Outcome of a successful replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceReport {
  /// Replaced word
  pub old_word: String,
  /// Replacement word
  pub new_word: String,
  /// Number of tokens rewritten
  pub replaced: usize,
}

/// A predicted next word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
  /// Predicted word
  pub word: String,
  /// How often it followed the input word
  pub count: usize,
}

/// Result of a spelling check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellCheck {
  /// The word is in the vocabulary
  Correct,
  /// Vocabulary words one edit away (possibly none)
  Suggestions(Vec<String>),
}

/// Sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
  /// score > 0
  Positive,
  /// score < 0
  Negative,
  /// score == 0
  Neutral,
}

impl Sentiment {
  /// Classifies a score.
  pub fn from_score(score: i64) -> Self {
    match score {
      s if s > 0 => Self::Positive,
      s if s < 0 => Self::Negative,
      _ => Self::Neutral,
    }
  }
}

impl fmt::Display for Sentiment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      Self::Positive => "Positive",
      Self::Negative => "Negative",
      Self::Neutral => "Neutral",
    };
    write!(f, "{label}")
  }
}

/// Sentiment analysis report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentReport {
  /// Final score after negation
  pub score: i64,
  /// Positive words found
  pub positive_hits: usize,
  /// Negative words found
  pub negative_hits: usize,
  /// Whether "not" flipped the score
  pub negated: bool,
  /// Classification of `score`
  pub label: Sentiment,
}

/// A word-cloud entry; `weight` is count / max count, rounded to 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudEntry {
  /// The word
  pub word: String,
  /// Relative weight in (0, 1]
  pub weight: f64,
}
