//! Human-readable rendering of model reports

use std::io::{self, Write};

use wordscope::models::{
  CharStats, Prediction, ReplaceReport, SearchHit, SentimentReport, SpellCheck, WordCloudEntry,
  WordCount, WordStats,
};

use super::choice::MenuChoice;
use crate::errors::{CliError, CliErrorKind};

/// Prints the main menu.
pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "===== wordscope text analyzer =====")?;
  for choice in MenuChoice::ALL {
    writeln!(out, "{choice}")?;
  }
  Ok(())
}

/// Confirms a load.
pub fn loaded<W: Write>(out: &mut W, words: usize, sentences: usize) -> io::Result<()> {
  writeln!(out, "Text loaded: {words} words in {sentences} sentences.")
}

/// Word statistics.
pub fn word_stats<W: Write>(out: &mut W, stats: &WordStats) -> io::Result<()> {
  writeln!(out, "Total words: {}", stats.total_words)?;
  writeln!(out, "Unique words: {}", stats.unique_words)?;
  writeln!(out, "Most common words:")?;
  word_counts(out, &stats.top_words)
}

/// Character statistics.
pub fn char_stats<W: Write>(out: &mut W, stats: &CharStats) -> io::Result<()> {
  writeln!(out, "Total characters: {}", stats.total_chars)?;
  writeln!(out, "Character frequencies:")?;
  for (c, count) in &stats.frequencies {
    writeln!(out, "  '{c}': {count}")?;
  }
  Ok(())
}

/// Search matches.
pub fn search_hits<W: Write>(out: &mut W, target: &str, hits: &[SearchHit]) -> io::Result<()> {
  writeln!(out, "'{target}' found {} time(s):", hits.len())?;
  for hit in hits {
    writeln!(out, "  sentence {}, word {}", hit.sentence, hit.word)?;
  }
  Ok(())
}

/// Replacement summary.
pub fn replaced<W: Write>(out: &mut W, report: &ReplaceReport) -> io::Result<()> {
  writeln!(
    out,
    "Replaced {} occurrence(s) of '{}' with '{}'.",
    report.replaced, report.old_word, report.new_word
  )
}

/// Autocomplete candidates.
pub fn completions<W: Write>(out: &mut W, prefix: &str, words: &[String]) -> io::Result<()> {
  if words.is_empty() {
    return writeln!(out, "No words start with '{prefix}'.");
  }
  writeln!(out, "Suggestions: {}", words.join(", "))
}

/// Next-word predictions.
pub fn predictions<W: Write>(out: &mut W, predictions: &[Prediction]) -> io::Result<()> {
  writeln!(out, "Next word suggestions:")?;
  for p in predictions {
    writeln!(out, "  {} ({})", p.word, p.count)?;
  }
  Ok(())
}

/// Spelling check result.
pub fn spelling<W: Write>(out: &mut W, word: &str, check: &SpellCheck) -> io::Result<()> {
  match check {
    SpellCheck::Correct => writeln!(out, "'{word}' is spelled correctly."),
    SpellCheck::Suggestions(s) if s.is_empty() => writeln!(out, "No suggestions for '{word}'."),
    SpellCheck::Suggestions(s) => writeln!(out, "Did you mean: {}?", s.join(", ")),
  }
}

/// Sentiment result.
pub fn sentiment<W: Write>(out: &mut W, report: &SentimentReport) -> io::Result<()> {
  writeln!(out, "Sentiment: {} (score {})", report.label, report.score)
}

/// Extracted keywords.
pub fn keywords<W: Write>(out: &mut W, keywords: &[WordCount]) -> io::Result<()> {
  if keywords.is_empty() {
    return writeln!(out, "No keywords: every word is a stop word.");
  }
  writeln!(out, "Top keywords:")?;
  word_counts(out, keywords)
}

/// Word-cloud weights.
pub fn word_cloud<W: Write>(out: &mut W, entries: &[WordCloudEntry]) -> io::Result<()> {
  writeln!(out, "Word cloud data:")?;
  for entry in entries {
    writeln!(out, "  {}: {:.2}", entry.word, entry.weight)?;
  }
  Ok(())
}

/// A recoverable error, worded for the user.
pub fn error<W: Write>(out: &mut W, err: &CliError) -> io::Result<()> {
  match err.kind() {
    CliErrorKind::InvalidSelection => writeln!(out, "Invalid choice, please try again."),
    _ => writeln!(out, "Error: {err}"),
  }
}

fn word_counts<W: Write>(out: &mut W, counts: &[WordCount]) -> io::Result<()> {
  for wc in counts {
    writeln!(out, "  {}: {}", wc.word, wc.count)?;
  }
  Ok(())
}
