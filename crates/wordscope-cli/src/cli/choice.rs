//! Menu choices

use std::fmt;
use std::str::FromStr;

use crate::errors::CliError;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
  /// Exit the program
  Exit,
  /// Load text from a file or direct entry
  LoadText,
  /// Word statistics
  WordStats,
  /// Character statistics
  CharStats,
  /// Positional word search
  Search,
  /// Replace a word everywhere
  Replace,
  /// Complete a prefix
  Autocomplete,
  /// Predict the next word
  PredictNext,
  /// Spelling suggestions
  SpellCheck,
  /// Sentiment of a sentence
  Sentiment,
  /// Keyword extraction
  Keywords,
  /// Word-cloud weights
  WordCloud,
}

impl MenuChoice {
  /// Menu entries in display order
  pub const ALL: [MenuChoice; 12] = [
    Self::LoadText,
    Self::WordStats,
    Self::CharStats,
    Self::Search,
    Self::Replace,
    Self::Autocomplete,
    Self::PredictNext,
    Self::SpellCheck,
    Self::Sentiment,
    Self::Keywords,
    Self::WordCloud,
    Self::Exit,
  ];

  /// Number typed to select the entry
  #[must_use]
  pub fn number(&self) -> u8 {
    match self {
      Self::Exit => 0,
      Self::LoadText => 1,
      Self::WordStats => 2,
      Self::CharStats => 3,
      Self::Search => 4,
      Self::Replace => 5,
      Self::Autocomplete => 6,
      Self::PredictNext => 7,
      Self::SpellCheck => 8,
      Self::Sentiment => 9,
      Self::Keywords => 10,
      Self::WordCloud => 11,
    }
  }

  /// Menu label
  #[must_use]
  pub fn label(&self) -> &'static str {
    match self {
      Self::Exit => "Exit",
      Self::LoadText => "Load text (file or direct entry)",
      Self::WordStats => "Word statistics",
      Self::CharStats => "Character statistics",
      Self::Search => "Search for a word",
      Self::Replace => "Replace a word",
      Self::Autocomplete => "Autocomplete a prefix",
      Self::PredictNext => "Predict the next word",
      Self::SpellCheck => "Check spelling",
      Self::Sentiment => "Analyze sentiment",
      Self::Keywords => "Extract keywords",
      Self::WordCloud => "Word cloud data",
    }
  }
}

impl fmt::Display for MenuChoice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:>2}. {}", self.number(), self.label())
  }
}

impl FromStr for MenuChoice {
  type Err = CliError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let input = s.trim();
    let number: u8 = input.parse().map_err(|_| CliError::invalid_selection(input))?;
    Self::ALL
      .into_iter()
      .find(|choice| choice.number() == number)
      .ok_or_else(|| CliError::invalid_selection(input))
  }
}
