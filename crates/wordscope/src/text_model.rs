// crates/wordscope/src/text_model.rs

//! TextModel: owner of the tokenized text and every index derived from it.
//!
//! - token sequence and sentence sequence
//! - vocabulary, word frequency, character frequency, bigram table
//!
//! Every index is rebuilt from scratch whenever the token sequence changes,
//! so the following hold after any mutating call:
//! - vocabulary == set(tokens)
//! - word frequency keys == vocabulary
//! - the bigram table has entries only for words with a successor

use std::collections::HashSet;

use tracing::debug;

use crate::analysis::{BigramTable, CharFrequency, SentimentLexicon, WordFrequency, edits1};
use crate::config::{AnalyzerConfig, LimitsConfig};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::{
  CharStats, Prediction, ReplaceReport, SearchHit, SentimentReport, SpellCheck, WordCloudEntry,
  WordCount, WordStats,
};
use crate::tokenizer::{normalize_word, split_sentences, strip_punctuation, tokenize};

/// In-memory text model.
///
/// Fields are private; the model is mutated only through [`load`](Self::load)
/// and [`replace`](Self::replace).
#[derive(Debug, Clone)]
pub struct TextModel {
  /// Normalized tokens in reading order
  tokens: Vec<String>,

  /// Lowercased raw sentences, split on `.`
  sentences: Vec<String>,

  /// Distinct tokens in first-encounter order
  vocabulary: Vec<String>,

  /// Lookup set mirroring `vocabulary`
  vocabulary_set: HashSet<String>,

  /// word → count
  word_freq: WordFrequency,

  /// char → count over all tokens
  char_freq: CharFrequency,

  /// word → successor counts
  bigrams: BigramTable,

  /// Normalized stop words
  stop_words: HashSet<String>,

  /// Positive / negative words
  lexicon: SentimentLexicon,

  /// Result limits
  limits: LimitsConfig,
}

impl Default for TextModel {
  fn default() -> Self {
    Self::from_valid_config(&AnalyzerConfig::default())
  }
}

impl TextModel {
  /// Creates an empty model.
  ///
  /// # Errors
  /// `AnalyzerError::Config` if the configuration does not validate.
  pub fn new(config: &AnalyzerConfig) -> AnalyzerResult<Self> {
    config.validate()?;
    Ok(Self::from_valid_config(config))
  }

  /// Creates an empty model with the built-in word lists and limits.
  pub fn with_default_config() -> Self {
    Self::default()
  }

  fn from_valid_config(config: &AnalyzerConfig) -> Self {
    Self {
      tokens: Vec::new(),
      sentences: Vec::new(),
      vocabulary: Vec::new(),
      vocabulary_set: HashSet::new(),
      word_freq: WordFrequency::new(),
      char_freq: CharFrequency::new(),
      bigrams: BigramTable::default(),
      stop_words: config.stop_words.iter().map(|w| normalize_word(w)).collect(),
      lexicon: SentimentLexicon::new(&config.positive_words, &config.negative_words),
      limits: config.limits,
    }
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Load & rebuild
  // ─────────────────────────────────────────────────────────────────────────

  /// Replaces the model contents with `text`.
  ///
  /// Sentences are split on `.` in the raw text; tokens come from the
  /// punctuation-stripped text. Empty text leaves every sequence empty.
  pub fn load(&mut self, text: &str) {
    self.sentences = split_sentences(text);
    self.tokens = tokenize(text);
    self.rebuild_indexes();
    debug!(
      tokens = self.tokens.len(),
      sentences = self.sentences.len(),
      vocabulary = self.vocabulary.len(),
      "text loaded"
    );
  }

  fn rebuild_indexes(&mut self) {
    self.word_freq = self.tokens.iter().cloned().collect();
    self.vocabulary = self.word_freq.keys().cloned().collect();
    self.vocabulary_set = self.vocabulary.iter().cloned().collect();
    self.char_freq = self.tokens.iter().flat_map(|t| t.chars()).collect();
    self.bigrams = BigramTable::from_tokens(&self.tokens);
  }

  fn ensure_loaded(&self) -> AnalyzerResult<()> {
    if self.tokens.is_empty() {
      return Err(AnalyzerError::empty_input("no text loaded"));
    }
    Ok(())
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Accessors
  // ─────────────────────────────────────────────────────────────────────────

  /// Whether any tokens are loaded.
  pub fn is_loaded(&self) -> bool {
    !self.tokens.is_empty()
  }

  /// Token sequence.
  pub fn tokens(&self) -> &[String] {
    &self.tokens
  }

  /// Sentence sequence.
  pub fn sentences(&self) -> &[String] {
    &self.sentences
  }

  /// Vocabulary in first-encounter order.
  pub fn vocabulary(&self) -> &[String] {
    &self.vocabulary
  }

  /// Whether `word` is in the vocabulary.
  pub fn contains_word(&self, word: &str) -> bool {
    self.vocabulary_set.contains(word)
  }

  /// Word frequency table.
  pub fn word_frequency(&self) -> &WordFrequency {
    &self.word_freq
  }

  /// Character frequency table.
  pub fn char_frequency(&self) -> &CharFrequency {
    &self.char_freq
  }

  /// Bigram table.
  pub fn bigrams(&self) -> &BigramTable {
    &self.bigrams
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Statistics
  // ─────────────────────────────────────────────────────────────────────────

  /// Token count, vocabulary size and the most frequent words.
  pub fn word_stats(&self) -> AnalyzerResult<WordStats> {
    self.ensure_loaded()?;
    Ok(WordStats {
      total_words: self.tokens.len(),
      unique_words: self.vocabulary.len(),
      top_words: self
        .word_freq
        .most_common(self.limits.top_words)
        .into_iter()
        .map(WordCount::from)
        .collect(),
    })
  }

  /// Character count and the full character frequency listing.
  pub fn char_stats(&self) -> AnalyzerResult<CharStats> {
    self.ensure_loaded()?;
    Ok(CharStats {
      total_chars: self.char_freq.total(),
      frequencies: self.char_freq.iter().map(|(c, n)| (*c, n)).collect(),
    })
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Search & replace
  // ─────────────────────────────────────────────────────────────────────────

  /// Finds every position of `target` in the sentence sequence.
  ///
  /// Each sentence is split on whitespace and each word is compared after
  /// stripping its punctuation, so `"world,"` matches `world`. Indices are
  /// 1-based and refer to the text as loaded.
  ///
  /// # Errors
  /// - `EmptyInput` if nothing is loaded or the target is empty
  /// - `NotFound` if there is no match
  pub fn search(&self, target: &str) -> AnalyzerResult<Vec<SearchHit>> {
    self.ensure_loaded()?;
    let target = normalize_word(target);
    if target.is_empty() {
      return Err(AnalyzerError::empty_input("no search word given"));
    }

    let hits: Vec<SearchHit> = self
      .sentences
      .iter()
      .enumerate()
      .flat_map(|(s, sentence)| {
        sentence
          .split_whitespace()
          .enumerate()
          .filter(|(_, word)| strip_punctuation(word) == target)
          .map(move |(w, _)| SearchHit {
            sentence: s + 1,
            word: w + 1,
          })
      })
      .collect();

    if hits.is_empty() {
      return Err(AnalyzerError::not_found(target));
    }
    Ok(hits)
  }

  /// Replaces every occurrence of `old` with `new` in the token sequence and
  /// rebuilds all derived indexes.
  ///
  /// The sentence sequence is left as loaded.
  ///
  /// # Errors
  /// - `EmptyInput` if nothing is loaded or either word is empty
  /// - `InvalidWord` if `new` is more than one word
  /// - `NotFound` if `old` is not in the vocabulary
  ///
  /// The model is unchanged on every error.
  pub fn replace(&mut self, old: &str, new: &str) -> AnalyzerResult<ReplaceReport> {
    self.ensure_loaded()?;
    let old_word = normalize_word(old);
    let new_word = normalize_word(new);
    if old_word.is_empty() || new_word.is_empty() {
      return Err(AnalyzerError::empty_input("replace needs both an old and a new word"));
    }
    // a token never spans whitespace
    if new_word.contains(char::is_whitespace) {
      return Err(AnalyzerError::InvalidWord { word: new_word });
    }
    if !self.vocabulary_set.contains(&old_word) {
      return Err(AnalyzerError::not_found(old_word));
    }

    let replaced = self.word_freq.get(old_word.as_str());
    self.tokens = self
      .tokens
      .iter()
      .map(|t| if *t == old_word { new_word.clone() } else { t.clone() })
      .collect();
    self.rebuild_indexes();
    debug!(old = %old_word, new = %new_word, replaced, "tokens replaced");

    Ok(ReplaceReport {
      old_word,
      new_word,
      replaced,
    })
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Completion & prediction
  // ─────────────────────────────────────────────────────────────────────────

  /// Vocabulary words starting with `prefix`, in vocabulary order.
  ///
  /// An empty prefix matches the whole vocabulary.
  pub fn autocomplete(&self, prefix: &str) -> AnalyzerResult<Vec<String>> {
    self.ensure_loaded()?;
    let prefix = normalize_word(prefix);
    Ok(
      self
        .vocabulary
        .iter()
        .filter(|w| w.starts_with(prefix.as_str()))
        .take(self.limits.autocomplete)
        .cloned()
        .collect(),
    )
  }

  /// Most likely next words after the last word of `phrase`.
  ///
  /// # Errors
  /// - `EmptyInput` if nothing is loaded or the phrase has no words
  /// - `NoSuggestions` if the last word never has a successor, including a
  ///   last word made only of punctuation
  pub fn predict_next(&self, phrase: &str) -> AnalyzerResult<Vec<Prediction>> {
    self.ensure_loaded()?;
    let raw_last = phrase
      .split_whitespace()
      .next_back()
      .ok_or_else(|| AnalyzerError::empty_input("no phrase given"))?;
    let last = normalize_word(raw_last);
    if last.is_empty() {
      return Err(AnalyzerError::NoSuggestions {
        word: raw_last.to_string(),
      });
    }

    let ranked = self.bigrams.ranked_successors(&last, self.limits.predictions);
    if ranked.is_empty() {
      return Err(AnalyzerError::NoSuggestions { word: last });
    }
    Ok(ranked.into_iter().map(|(word, count)| Prediction { word, count }).collect())
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Spelling & sentiment
  // ─────────────────────────────────────────────────────────────────────────

  /// Checks `word` against the vocabulary.
  ///
  /// Unknown words get up to `limits.spelling` vocabulary words one edit away,
  /// in candidate-generation order.
  pub fn suggest_spelling(&self, word: &str) -> AnalyzerResult<SpellCheck> {
    self.ensure_loaded()?;
    let word = normalize_word(word);
    if word.is_empty() {
      return Err(AnalyzerError::empty_input("no word given"));
    }
    if self.vocabulary_set.contains(&word) {
      return Ok(SpellCheck::Correct);
    }

    let suggestions: Vec<String> = edits1(&word)
      .into_iter()
      .filter(|candidate| self.vocabulary_set.contains(candidate))
      .take(self.limits.spelling)
      .collect();
    debug!(word = %word, found = suggestions.len(), "spelling candidates checked");
    Ok(SpellCheck::Suggestions(suggestions))
  }

  /// Scores the sentiment of `sentence`; independent of the loaded text.
  pub fn sentiment(&self, sentence: &str) -> SentimentReport {
    self.lexicon.score_sentence(sentence)
  }

  // ─────────────────────────────────────────────────────────────────────────
  // Keywords & word cloud
  // ─────────────────────────────────────────────────────────────────────────

  fn content_frequency(&self) -> WordFrequency {
    self.tokens.iter().filter(|t| !self.stop_words.contains(*t)).cloned().collect()
  }

  /// Most frequent non-stop words, descending, ties in first-encounter order.
  ///
  /// An empty list means every token is a stop word.
  pub fn keywords(&self) -> AnalyzerResult<Vec<WordCount>> {
    self.ensure_loaded()?;
    Ok(
      self
        .content_frequency()
        .most_common(self.limits.keywords)
        .into_iter()
        .map(WordCount::from)
        .collect(),
    )
  }

  /// Word-cloud weights for the first `limits.word_cloud` non-stop words.
  ///
  /// Entries follow first-encounter order, not weight order. Each weight is
  /// count / max count rounded to 2 decimals.
  ///
  /// # Errors
  /// `EmptyInput` if nothing is loaded or every token is a stop word.
  pub fn word_cloud(&self) -> AnalyzerResult<Vec<WordCloudEntry>> {
    self.ensure_loaded()?;
    let freq = self.content_frequency();
    let max = freq
      .max_count()
      .ok_or_else(|| AnalyzerError::empty_input("no words left after removing stop words"))?;

    Ok(
      freq
        .iter()
        .take(self.limits.word_cloud)
        .map(|(word, count)| WordCloudEntry {
          word: word.clone(),
          weight: round2(count as f64 / max as f64),
        })
        .collect(),
    )
  }
}

/// Rounds to 2 decimals, halves to even (0.125 -> 0.12, 0.625 -> 0.62).
fn round2(value: f64) -> f64 {
  (value * 100.0).round_ties_even() / 100.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Sentiment;

  fn model_with(config: AnalyzerConfig, text: &str) -> TextModel {
    let mut model = TextModel::new(&config).expect("valid config");
    model.load(text);
    model
  }

  fn loaded(text: &str) -> TextModel {
    model_with(AnalyzerConfig::default(), text)
  }

  fn assert_vocabulary_consistent(model: &TextModel) {
    let from_tokens: HashSet<&String> = model.tokens().iter().collect();
    let vocab: HashSet<&String> = model.vocabulary().iter().collect();
    assert_eq!(from_tokens, vocab);
    assert_eq!(model.vocabulary().len(), model.word_frequency().len());
    for word in model.vocabulary() {
      assert!(model.word_frequency().contains(word.as_str()));
    }
  }

  // ─── load ──────────────────────────────────────────────────────────────

  #[test]
  fn load_tokenizes_and_indexes() {
    let model = loaded("Hello world. Hello AI.");
    assert_eq!(model.tokens().len(), 4);
    assert_eq!(model.word_frequency().get("hello"), 2);
    assert_eq!(model.char_frequency().get(&'h'), 2);
    assert!(model.contains_word("hello"));
    assert_vocabulary_consistent(&model);
  }

  #[test]
  fn load_splits_sentences_before_stripping() {
    let model = loaded("Hello world. Hello AI.");
    assert_eq!(model.sentences(), &["hello world", "hello ai"]);
  }

  #[test]
  fn load_is_idempotent() {
    let mut model = loaded("one two two three");
    let tokens = model.tokens().to_vec();
    let freq = model.word_frequency().clone();
    model.load("one two two three");
    assert_eq!(model.tokens(), tokens.as_slice());
    assert_eq!(model.word_frequency(), &freq);
  }

  #[test]
  fn load_replaces_previous_text() {
    let mut model = loaded("alpha beta");
    model.load("gamma");
    assert_eq!(model.vocabulary(), &["gamma"]);
    assert!(model.bigrams().is_empty());
  }

  #[test]
  fn load_empty_text_is_not_an_error() {
    let model = loaded("");
    assert!(!model.is_loaded());
    assert!(model.tokens().is_empty());
    assert!(model.sentences().is_empty());
    assert!(model.vocabulary().is_empty());
    assert!(model.char_frequency().is_empty());
  }

  #[test]
  fn operations_before_load_are_empty_input() {
    let model = TextModel::with_default_config();
    assert!(matches!(model.word_stats(), Err(AnalyzerError::EmptyInput { .. })));
    assert!(matches!(model.char_stats(), Err(AnalyzerError::EmptyInput { .. })));
    assert!(matches!(model.search("x"), Err(AnalyzerError::EmptyInput { .. })));
    assert!(matches!(model.autocomplete("x"), Err(AnalyzerError::EmptyInput { .. })));
    assert!(matches!(model.keywords(), Err(AnalyzerError::EmptyInput { .. })));
    assert!(matches!(model.word_cloud(), Err(AnalyzerError::EmptyInput { .. })));
  }

  #[test]
  fn invalid_config_is_rejected() {
    let mut config = AnalyzerConfig::default();
    config.limits.spelling = 0;
    assert!(matches!(TextModel::new(&config), Err(AnalyzerError::Config(_))));
  }

  // ─── statistics ────────────────────────────────────────────────────────

  #[test]
  fn word_stats_ranks_with_stable_ties() {
    let model = loaded("b a c a b d");
    let stats = model.word_stats().unwrap();
    assert_eq!(stats.total_words, 6);
    assert_eq!(stats.unique_words, 4);
    let top: Vec<(&str, usize)> =
      stats.top_words.iter().map(|w| (w.word.as_str(), w.count)).collect();
    assert_eq!(top, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
  }

  #[test]
  fn word_stats_lists_at_most_ten() {
    let text: Vec<String> = (0..15).map(|i| format!("w{i}")).collect();
    let model = loaded(&text.join(" "));
    assert_eq!(model.word_stats().unwrap().top_words.len(), 10);
  }

  #[test]
  fn char_stats_excludes_spaces() {
    let model = loaded("ab ba");
    let stats = model.char_stats().unwrap();
    assert_eq!(stats.total_chars, 4);
    assert_eq!(stats.frequencies, vec![('a', 2), ('b', 2)]);
  }

  // ─── search ────────────────────────────────────────────────────────────

  #[test]
  fn search_reports_sentence_and_word_positions() {
    let model = loaded("The cat sat. A dog and the cat ran.");
    let hits = model.search("Cat").unwrap();
    assert_eq!(
      hits,
      vec![
        SearchHit { sentence: 1, word: 2 },
        SearchHit { sentence: 2, word: 5 },
      ]
    );
  }

  #[test]
  fn search_ignores_punctuation_on_sentence_words() {
    let model = loaded("Hello, world. World!");
    let hits = model.search("world").unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1], SearchHit { sentence: 2, word: 1 });
  }

  #[test]
  fn search_missing_word_is_not_found() {
    let model = loaded("one two");
    match model.search("three") {
      Err(AnalyzerError::NotFound { word }) => assert_eq!(word, "three"),
      other => panic!("expected NotFound, got {other:?}"),
    }
  }

  // ─── replace ───────────────────────────────────────────────────────────

  #[test]
  fn replace_rewrites_tokens_and_rebuilds() {
    let mut model = loaded("big data is big news");
    let report = model.replace("BIG", "huge").unwrap();
    assert_eq!(report.replaced, 2);
    assert_eq!(model.tokens(), &["huge", "data", "is", "huge", "news"]);
    assert!(!model.contains_word("big"));
    assert_eq!(model.word_frequency().get("huge"), 2);
    assert_eq!(model.bigrams().count("huge", "data"), 1);
    assert!(!model.bigrams().contains("big"));
    assert_vocabulary_consistent(&model);
  }

  #[test]
  fn replace_rebuilds_char_frequency() {
    let mut model = loaded("cat cat");
    model.replace("cat", "dog").unwrap();
    assert_eq!(model.char_frequency().get(&'c'), 0);
    assert_eq!(model.char_frequency().get(&'d'), 2);
  }

  #[test]
  fn replace_rejects_multi_word_replacement() {
    let mut model = loaded("old city");
    match model.replace("old", "new york") {
      Err(AnalyzerError::InvalidWord { word }) => assert_eq!(word, "new york"),
      other => panic!("expected InvalidWord, got {other:?}"),
    }
    assert_eq!(model.tokens(), &["old", "city"]);
    assert_eq!(model.vocabulary(), &["old", "city"]);
    assert_eq!(model.char_frequency().get(&' '), 0);
    assert_eq!(model.char_frequency().get(&'y'), 1);
    assert_vocabulary_consistent(&model);
  }

  #[test]
  fn replace_into_existing_word_merges_counts() {
    let mut model = loaded("a b a c");
    model.replace("c", "a").unwrap();
    assert_eq!(model.word_frequency().get("a"), 3);
    assert_eq!(model.vocabulary(), &["a", "b"]);
    assert_vocabulary_consistent(&model);
  }

  #[test]
  fn replace_absent_word_changes_nothing() {
    let mut model = loaded("a b c d");
    let tokens = model.tokens().to_vec();
    let vocabulary = model.vocabulary().to_vec();
    let bigrams = model.bigrams().clone();

    let err = model.replace("zzz", "y").unwrap_err();
    assert!(matches!(err, AnalyzerError::NotFound { .. }));
    assert_eq!(model.tokens(), tokens.as_slice());
    assert_eq!(model.vocabulary(), vocabulary.as_slice());
    assert_eq!(model.bigrams(), &bigrams);
  }

  #[test]
  fn replace_keeps_sentences_as_loaded() {
    let mut model = loaded("red fish. blue fish.");
    model.replace("fish", "bird").unwrap();
    assert!(model.search("fish").is_ok());
  }

  // ─── autocomplete & predict ────────────────────────────────────────────

  #[test]
  fn autocomplete_in_vocabulary_order() {
    let model = loaded("house hi apple hey hello hi");
    assert_eq!(model.autocomplete("H").unwrap(), vec!["house", "hi", "hey", "hello"]);
  }

  #[test]
  fn autocomplete_empty_prefix_truncates_vocabulary() {
    let text: Vec<String> = (0..20).map(|i| format!("w{i}")).collect();
    let model = loaded(&text.join(" "));
    let all = model.autocomplete("").unwrap();
    assert_eq!(all.len(), 10);
    assert_eq!(all[0], "w0");
  }

  #[test]
  fn autocomplete_without_match_is_empty() {
    let model = loaded("alpha beta");
    assert!(model.autocomplete("z").unwrap().is_empty());
  }

  #[test]
  fn predict_uses_last_word() {
    let model = loaded("data science is cool. data science rocks. data mining");
    let predictions = model.predict_next("I love Data").unwrap();
    let words: Vec<&str> = predictions.iter().map(|p| p.word.as_str()).collect();
    assert_eq!(words, vec!["science", "mining"]);
    assert_eq!(predictions[0].count, 2);
  }

  #[test]
  fn predict_returns_at_most_three() {
    let model = loaded("i a i b i c i d i e");
    assert_eq!(model.predict_next("i").unwrap().len(), 3);
  }

  #[test]
  fn predict_empty_phrase_is_empty_input() {
    let model = loaded("a b");
    assert!(matches!(model.predict_next("   "), Err(AnalyzerError::EmptyInput { .. })));
  }

  #[test]
  fn predict_unknown_word_has_no_suggestions() {
    let model = loaded("a b");
    match model.predict_next("b") {
      Err(AnalyzerError::NoSuggestions { word }) => assert_eq!(word, "b"),
      other => panic!("expected NoSuggestions, got {other:?}"),
    }
  }

  #[test]
  fn predict_punctuation_only_last_word_has_no_suggestions() {
    let model = loaded("data science data mining");
    match model.predict_next("data !!") {
      Err(AnalyzerError::NoSuggestions { word }) => assert_eq!(word, "!!"),
      other => panic!("expected NoSuggestions, got {other:?}"),
    }
  }

  // ─── spelling ──────────────────────────────────────────────────────────

  #[test]
  fn spelling_known_word_is_correct() {
    let model = loaded("hello");
    assert_eq!(model.suggest_spelling("Hello").unwrap(), SpellCheck::Correct);
  }

  #[test]
  fn spelling_suggests_substitution() {
    let model = loaded("hello");
    assert_eq!(
      model.suggest_spelling("hallo").unwrap(),
      SpellCheck::Suggestions(vec!["hello".to_string()])
    );
  }

  #[test]
  fn spelling_suggests_each_edit_kind() {
    let model = loaded("cat cast act at");
    let SpellCheck::Suggestions(found) = model.suggest_spelling("cta").unwrap() else {
      panic!("expected suggestions");
    };
    // transposition only reaches "cat"
    assert_eq!(found, vec!["cat"]);

    let SpellCheck::Suggestions(found) = model.suggest_spelling("cas").unwrap() else {
      panic!("expected suggestions");
    };
    // substitution then insertion
    assert_eq!(found, vec!["cat", "cast"]);
  }

  #[test]
  fn spelling_caps_suggestions_at_five() {
    let model = loaded("bat cat eat fat hat mat pat rat");
    let SpellCheck::Suggestions(found) = model.suggest_spelling("zat").unwrap() else {
      panic!("expected suggestions");
    };
    assert_eq!(found.len(), 5);
  }

  #[test]
  fn spelling_far_word_has_no_suggestions() {
    let model = loaded("hello");
    assert_eq!(model.suggest_spelling("xyz").unwrap(), SpellCheck::Suggestions(Vec::new()));
  }

  // ─── sentiment ─────────────────────────────────────────────────────────

  #[test]
  fn sentiment_with_custom_lexicon() {
    let model = model_with(
      AnalyzerConfig::default().with_sentiment_words(["good"], ["bad"]),
      "",
    );
    assert_eq!(model.sentiment("this is good").label, Sentiment::Positive);
    assert_eq!(model.sentiment("this is not good").label, Sentiment::Negative);
    assert_eq!(model.sentiment("this is fine").label, Sentiment::Neutral);
  }

  #[test]
  fn sentiment_default_lexicon() {
    let model = TextModel::with_default_config();
    assert_eq!(model.sentiment("I love this wonderful day").score, 2);
    assert_eq!(model.sentiment("what a horrible day").label, Sentiment::Negative);
  }

  // ─── keywords & word cloud ─────────────────────────────────────────────

  #[test]
  fn keywords_skip_stop_words() {
    let model = model_with(
      AnalyzerConfig::default().with_stop_words(["is", "the"]),
      "data is the new oil data",
    );
    let keywords = model.keywords().unwrap();
    assert_eq!(keywords[0], WordCount::from(("data".to_string(), 2)));
    assert!(keywords.iter().all(|k| k.word != "is" && k.word != "the"));
    assert_eq!(keywords.len(), 3);
  }

  #[test]
  fn keywords_all_stop_words_is_empty() {
    let model = loaded("the a is");
    assert!(model.keywords().unwrap().is_empty());
  }

  #[test]
  fn word_cloud_weights_relative_to_max() {
    let model = model_with(
      AnalyzerConfig::default().with_stop_words(Vec::<String>::new()),
      "ai ai ml data",
    );
    let cloud = model.word_cloud().unwrap();
    assert_eq!(
      cloud,
      vec![
        WordCloudEntry { word: "ai".to_string(), weight: 1.0 },
        WordCloudEntry { word: "ml".to_string(), weight: 0.5 },
        WordCloudEntry { word: "data".to_string(), weight: 0.5 },
      ]
    );
  }

  #[test]
  fn word_cloud_rounds_to_two_decimals() {
    let model = loaded("x x x y");
    let cloud = model.word_cloud().unwrap();
    assert_eq!(cloud[1].weight, 0.33);
  }

  #[test]
  fn word_cloud_rounds_halves_to_even() {
    let config = AnalyzerConfig::default().with_stop_words(Vec::<String>::new());
    let model = model_with(config, "a a a a a a a a b c c c c c");
    let cloud = model.word_cloud().unwrap();
    let weights: Vec<(&str, f64)> = cloud.iter().map(|e| (e.word.as_str(), e.weight)).collect();
    // 1/8 and 5/8 sit exactly on a half at two decimals
    assert_eq!(weights, vec![("a", 1.0), ("b", 0.12), ("c", 0.62)]);
  }

  #[test]
  fn word_cloud_keeps_first_encounter_order() {
    let text: Vec<String> = (0..12).map(|i| format!("w{i}")).chain(["w11".to_string()]).collect();
    let model = loaded(&text.join(" "));
    let cloud = model.word_cloud().unwrap();
    assert_eq!(cloud.len(), 10);
    // w11 has the top weight but is past the first ten
    assert!(cloud.iter().all(|e| e.word != "w11"));
    assert_eq!(cloud[0].weight, 0.5);
  }

  #[test]
  fn word_cloud_only_stop_words_is_empty_input() {
    let model = loaded("the and of");
    assert!(matches!(model.word_cloud(), Err(AnalyzerError::EmptyInput { .. })));
  }
}
