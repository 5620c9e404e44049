//! Edit-distance-1 candidate generation

use std::collections::HashSet;

/// Letters used for substitutions and insertions.
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// All strings one edit away from `word`.
///
/// Candidates come out in generation order: deletions, adjacent
/// transpositions, substitutions, insertions. Duplicates are dropped, keeping
/// the first occurrence. `word` itself can appear (e.g. substituting a letter
/// with itself) and is left to the caller to filter.
///
/// Works on `char`s, so non-ASCII words are split on character boundaries.
pub fn edits1(word: &str) -> Vec<String> {
  let chars: Vec<char> = word.chars().collect();
  let n = chars.len();

  let mut seen = HashSet::new();
  let mut candidates = Vec::with_capacity(54 * n + 25);
  let mut push = |candidate: String| {
    if seen.insert(candidate.clone()) {
      candidates.push(candidate);
    }
  };

  // deletions
  for i in 0..n {
    push(join(&chars[..i], &[], &chars[i + 1..]));
  }

  // transpositions
  for i in 0..n.saturating_sub(1) {
    push(join(&chars[..i], &[chars[i + 1], chars[i]], &chars[i + 2..]));
  }

  // substitutions
  for i in 0..n {
    for letter in ALPHABET.chars() {
      push(join(&chars[..i], &[letter], &chars[i + 1..]));
    }
  }

  // insertions
  for i in 0..=n {
    for letter in ALPHABET.chars() {
      push(join(&chars[..i], &[letter], &chars[i..]));
    }
  }

  candidates
}

fn join(left: &[char], middle: &[char], right: &[char]) -> String {
  left.iter().chain(middle).chain(right).collect()
}
