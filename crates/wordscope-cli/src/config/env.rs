//! Config loading from environment variables

use std::path::PathBuf;

use wordscope::AnalyzerConfig;

use super::constants::{CONFIG_PATH_VAR, DEFAULT_LOG_FILTER, LOG_FILTER_VAR};
use crate::errors::CliError;

/// CLI Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Word lists and limits handed to the text model
  pub analyzer: AnalyzerConfig,
  /// Where `analyzer` was read from; `None` means built-in defaults
  pub analyzer_path: Option<PathBuf>,
  /// tracing filter directive (e.g. "warn", "wordscope=debug")
  pub log_filter: String,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `WORDSCOPE_CONFIG`: optional path to a JSON analyzer config
  /// - `WORDSCOPE_LOG`: optional tracing filter, default `warn`
  ///
  /// # Errors
  /// Returns an error if the config file cannot be read, parsed or validated
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_values(
      std::env::var(CONFIG_PATH_VAR).ok(),
      std::env::var(LOG_FILTER_VAR).ok(),
    )
  }

  /// Builds the configuration from already-read variable values
  ///
  /// Empty values count as unset.
  pub fn from_values(
    config_path: Option<String>,
    log_filter: Option<String>,
  ) -> crate::errors::Result<Self> {
    let analyzer_path = config_path.filter(|p| !p.trim().is_empty()).map(PathBuf::from);

    let analyzer = match &analyzer_path {
      Some(path) => AnalyzerConfig::from_json_file(path).map_err(|e| CliError::config(e.to_string()))?,
      None => AnalyzerConfig::default(),
    };

    let log_filter = log_filter
      .filter(|f| !f.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    Ok(Self {
      analyzer,
      analyzer_path,
      log_filter,
    })
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      analyzer: AnalyzerConfig::default(),
      analyzer_path: None,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}
