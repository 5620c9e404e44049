//! Lexicon-based sentiment scoring

use std::collections::HashSet;

use crate::models::{Sentiment, SentimentReport};
use crate::tokenizer::normalize_word;

/// The word that flips the sign of the whole sentence.
const NEGATION_WORD: &str = "not";

/// Positive and negative word sets.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
  positive: HashSet<String>,
  negative: HashSet<String>,
}

impl SentimentLexicon {
  /// Builds a lexicon; words are normalized like tokens.
  pub fn new<'a>(
    positive: impl IntoIterator<Item = &'a String>,
    negative: impl IntoIterator<Item = &'a String>,
  ) -> Self {
    Self {
      positive: positive.into_iter().map(|w| normalize_word(w)).collect(),
      negative: negative.into_iter().map(|w| normalize_word(w)).collect(),
    }
  }

  /// Scores a sentence.
  ///
  /// score = positive hits − negative hits. If the word `not` occurs anywhere
  /// in the sentence the score is negated, regardless of where it stands
  /// relative to the sentiment words.
  pub fn score_sentence(&self, sentence: &str) -> SentimentReport {
    let words: Vec<String> = sentence.split_whitespace().map(normalize_word).collect();

    let positive_hits = words.iter().filter(|w| self.positive.contains(*w)).count();
    let negative_hits = words.iter().filter(|w| self.negative.contains(*w)).count();
    let negated = words.iter().any(|w| w == NEGATION_WORD);

    let mut score = positive_hits as i64 - negative_hits as i64;
    if negated {
      score = -score;
    }

    SentimentReport {
      score,
      positive_hits,
      negative_hits,
      negated,
      label: Sentiment::from_score(score),
    }
  }
}
