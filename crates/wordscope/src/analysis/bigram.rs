//! Word bigram table

use std::collections::HashMap;

use super::frequency::WordFrequency;

/// Maps a word to the frequency distribution of the words that follow it.
///
/// # Invariants
/// - only words with at least one successor have an entry
/// - successor counts are >= 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigramTable {
  successors: HashMap<String, WordFrequency>,
}

impl BigramTable {
  /// Builds the table from consecutive token pairs.
  pub fn from_tokens(tokens: &[String]) -> Self {
    let mut successors: HashMap<String, WordFrequency> = HashMap::new();
    for pair in tokens.windows(2) {
      successors.entry(pair[0].clone()).or_default().add(pair[1].clone());
    }
    Self { successors }
  }

  /// Successor distribution for `word`, if it has any successors.
  pub fn successors(&self, word: &str) -> Option<&WordFrequency> {
    self.successors.get(word)
  }

  /// Count of `next` directly following `word`.
  pub fn count(&self, word: &str, next: &str) -> usize {
    self.successors(word).map_or(0, |s| s.get(next))
  }

  /// Whether `word` has an entry.
  pub fn contains(&self, word: &str) -> bool {
    self.successors.contains_key(word)
  }

  /// Up to `n` successors by descending count; ties keep first-encounter order.
  pub fn ranked_successors(&self, word: &str, n: usize) -> Vec<(String, usize)> {
    self.successors(word).map(|s| s.most_common(n)).unwrap_or_default()
  }

  /// Number of words with at least one successor.
  pub fn len(&self) -> usize {
    self.successors.len()
  }

  /// Whether the table is empty.
  pub fn is_empty(&self) -> bool {
    self.successors.is_empty()
  }
}
