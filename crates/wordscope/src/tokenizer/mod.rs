//! tokenizer module
pub mod text_tokenizer;

/// Re-exports
pub use text_tokenizer::{
  fold_case, normalize_word, split_sentences, strip_punctuation, tokenize,
};
