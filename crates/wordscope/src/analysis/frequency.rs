//! Insertion-ordered frequency table

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counter that remembers first-encounter order.
///
/// Iteration and ranking are deterministic: keys come out in the order they
/// were first counted, and [`most_common`](Self::most_common) breaks ties by
/// that same order.
///
/// # Invariants
/// - `order` holds each key exactly once
/// - every key in `order` has a count >= 1 in `counts`
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
  order: Vec<K>,
  counts: HashMap<K, usize>,
}

/// Word → count
pub type WordFrequency = FrequencyTable<String>;

/// Character → count
pub type CharFrequency = FrequencyTable<char>;

impl<K: Eq + Hash> PartialEq for FrequencyTable<K> {
  fn eq(&self, other: &Self) -> bool {
    self.order == other.order && self.counts == other.counts
  }
}

impl<K: Eq + Hash> Eq for FrequencyTable<K> {}

impl<K> Default for FrequencyTable<K> {
  fn default() -> Self {
    Self {
      order: Vec::new(),
      counts: HashMap::new(),
    }
  }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
  /// Creates an empty table.
  pub fn new() -> Self {
    Self::default()
  }

  /// Counts one occurrence of `key`.
  pub fn add(&mut self, key: K) {
    match self.counts.get_mut(&key) {
      Some(count) => *count += 1,
      None => {
        self.order.push(key.clone());
        self.counts.insert(key, 1);
      }
    }
  }

  /// Count for `key`, 0 if never seen.
  pub fn get<Q>(&self, key: &Q) -> usize
  where
    K: std::borrow::Borrow<Q>,
    Q: Eq + Hash + ?Sized,
  {
    self.counts.get(key).copied().unwrap_or(0)
  }

  /// Whether `key` has been counted.
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: std::borrow::Borrow<Q>,
    Q: Eq + Hash + ?Sized,
  {
    self.counts.contains_key(key)
  }

  /// Number of distinct keys.
  pub fn len(&self) -> usize {
    self.order.len()
  }

  /// Whether the table is empty.
  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }

  /// Sum of all counts.
  pub fn total(&self) -> usize {
    self.counts.values().sum()
  }

  /// Highest count, `None` for an empty table.
  pub fn max_count(&self) -> Option<usize> {
    self.counts.values().copied().max()
  }

  /// Keys in first-encounter order.
  pub fn keys(&self) -> impl Iterator<Item = &K> {
    self.order.iter()
  }

  /// `(key, count)` pairs in first-encounter order.
  pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
    self.order.iter().map(|k| (k, self.counts[k]))
  }

  /// Up to `n` entries by descending count; ties keep first-encounter order.
  pub fn most_common(&self, n: usize) -> Vec<(K, usize)> {
    let mut entries: Vec<(K, usize)> = self.iter().map(|(k, c)| (k.clone(), c)).collect();
    // sort_by is stable
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
  }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
  fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
    let mut table = Self::new();
    for key in iter {
      table.add(key);
    }
    table
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn words(list: &[&str]) -> WordFrequency {
    list.iter().map(|w| (*w).to_string()).collect()
  }

  #[test]
  fn counts_and_order() {
    let table = words(&["b", "a", "b", "c", "a", "b"]);
    assert_eq!(table.get("b"), 3);
    assert_eq!(table.get("a"), 2);
    assert_eq!(table.get("zzz"), 0);
    let keys: Vec<&str> = table.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
    assert_eq!(table.total(), 6);
    assert_eq!(table.len(), 3);
  }

  #[test]
  fn most_common_breaks_ties_by_first_encounter() {
    let table = words(&["x", "y", "z", "y", "x", "w"]);
    let top = table.most_common(3);
    assert_eq!(
      top,
      vec![("x".to_string(), 2), ("y".to_string(), 2), ("z".to_string(), 1)]
    );
  }

  #[test]
  fn most_common_with_large_n_returns_all() {
    let table = words(&["a", "b"]);
    assert_eq!(table.most_common(10).len(), 2);
  }

  #[test]
  fn empty_table() {
    let table = WordFrequency::new();
    assert!(table.is_empty());
    assert_eq!(table.max_count(), None);
    assert!(table.most_common(5).is_empty());
  }

  #[test]
  fn char_frequency_counts_chars() {
    let table: CharFrequency = "hello".chars().collect();
    assert_eq!(table.get(&'l'), 2);
    assert_eq!(table.max_count(), Some(2));
    let order: Vec<char> = table.keys().copied().collect();
    assert_eq!(order, vec!['h', 'e', 'l', 'o']);
  }
}
