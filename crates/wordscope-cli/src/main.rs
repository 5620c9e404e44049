//! wordscope CLI entry point

use std::io;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wordscope::TextModel;
use wordscope_cli::config::{Config, DEFAULT_LOG_FILTER};
use wordscope_cli::{CliError, Session};

fn main() -> Result<(), CliError> {
  // Load settings first; the log filter is part of them
  let config = Config::from_env()?;

  // Logging goes to stderr so it never interleaves with the menu
  let filter =
    EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
  tracing::info!(config = ?config.analyzer_path, "configuration loaded");

  let model = TextModel::new(&config.analyzer)?;

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut session = Session::new(model, stdin.lock(), stdout.lock());
  session.run()
}
