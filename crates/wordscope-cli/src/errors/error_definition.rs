//! CLI error definitions

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use wordscope::AnalyzerError;

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
  /// File missing or unreadable
  InputUnavailable,
  /// Target word absent from the text
  NotFound,
  /// Nothing to work on
  EmptyInput,
  /// No successors for the last word of a phrase
  NoSuggestions,
  /// Replacement is not a single word
  InvalidWord,
  /// A typed line is not valid UTF-8
  InvalidEncoding,
  /// Unrecognized menu command
  InvalidSelection,
  /// Configuration error
  Config,
  /// Terminal read/write failure
  Io,
}

impl CliErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InputUnavailable => "input_unavailable",
      Self::NotFound => "not_found",
      Self::EmptyInput => "empty_input",
      Self::NoSuggestions => "no_suggestions",
      Self::InvalidWord => "invalid_word",
      Self::InvalidEncoding => "invalid_encoding",
      Self::InvalidSelection => "invalid_selection",
      Self::Config => "config_error",
      Self::Io => "io_error",
    }
  }

  /// Whether the error ends the session
  ///
  /// Terminal failures and startup configuration errors are fatal; everything
  /// else is reported and the menu loop continues.
  #[must_use]
  pub fn is_fatal(&self) -> bool {
    matches!(self, Self::Io | Self::Config)
  }
}

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
  /// The text file could not be read
  #[error("file not found or unreadable: {path:?} ({source})")]
  InputUnavailable {
    /// Requested path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: io::Error,
  },

  /// Unrecognized menu command
  #[error("invalid choice: {0:?}")]
  InvalidSelection(String),

  /// A line read from the terminal is not valid UTF-8; the line is skipped
  #[error("input is not valid UTF-8")]
  InvalidEncoding,

  /// Error from the text model
  #[error(transparent)]
  Analyzer(#[from] AnalyzerError),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),

  /// Terminal read/write failure
  #[error("terminal IO error: {0}")]
  Io(#[from] io::Error),
}

impl CliError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> CliErrorKind {
    match self {
      Self::InputUnavailable { .. } => CliErrorKind::InputUnavailable,
      Self::InvalidSelection(_) => CliErrorKind::InvalidSelection,
      Self::InvalidEncoding => CliErrorKind::InvalidEncoding,
      Self::Analyzer(err) => match err {
        AnalyzerError::NotFound { .. } => CliErrorKind::NotFound,
        AnalyzerError::EmptyInput { .. } => CliErrorKind::EmptyInput,
        AnalyzerError::NoSuggestions { .. } => CliErrorKind::NoSuggestions,
        AnalyzerError::InvalidWord { .. } => CliErrorKind::InvalidWord,
        AnalyzerError::Config(_) => CliErrorKind::Config,
        // AnalyzerError is #[non_exhaustive]
        _ => CliErrorKind::EmptyInput,
      },
      Self::Config(_) => CliErrorKind::Config,
      Self::Io(_) => CliErrorKind::Io,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Whether the error ends the session
  #[must_use]
  pub fn is_fatal(&self) -> bool {
    self.kind().is_fatal()
  }

  /// Creates an input-unavailable error
  #[must_use]
  pub fn input_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
    Self::InputUnavailable {
      path: path.into(),
      source,
    }
  }

  /// Creates an invalid-selection error
  #[must_use]
  pub fn invalid_selection(input: impl Into<String>) -> Self {
    Self::InvalidSelection(input.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CliError>;
