//! Text normalization and tokenization
//!
//! Two views are produced from the same raw text:
//! - tokens: lowercased, ASCII punctuation deleted, split on whitespace
//! - sentences: lowercased, split on `.` *before* punctuation is deleted
//!
//! Punctuation is deleted, not replaced with a space, so words joined only by
//! punctuation merge into one token (`"end.start"` → `"endstart"`).

/// Sentence delimiter in the raw text.
const SENTENCE_DELIMITER: char = '.';

/// Lowercases the text.
pub fn fold_case(text: &str) -> String {
  text.to_lowercase()
}

/// Deletes every ASCII punctuation character.
///
/// The set is exactly `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`.
pub fn strip_punctuation(text: &str) -> String {
  text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Normalizes a single user-supplied word the same way tokens are normalized.
///
/// Surrounding whitespace is trimmed.
pub fn normalize_word(word: &str) -> String {
  strip_punctuation(&fold_case(word.trim()))
}

/// Splits raw text into normalized tokens in reading order.
pub fn tokenize(text: &str) -> Vec<String> {
  strip_punctuation(&fold_case(text)).split_whitespace().map(str::to_string).collect()
}

/// Splits raw text into lowercased sentences.
///
/// Segments are trimmed, and segments that are empty after trimming are
/// dropped (e.g. the tail after a final period).
pub fn split_sentences(text: &str) -> Vec<String> {
  fold_case(text)
    .split(SENTENCE_DELIMITER)
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}
