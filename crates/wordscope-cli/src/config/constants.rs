//! CLI constant definitions

/// Line that terminates directly entered text
///
/// Must appear on a line of its own, with nothing else on it.
pub const END_TEXT_SENTINEL: &str = "$$END_TEXT$$";

/// Default tracing filter
///
/// Only warnings and errors reach stderr unless overridden.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable holding the path of a JSON analyzer config
pub const CONFIG_PATH_VAR: &str = "WORDSCOPE_CONFIG";

/// Environment variable holding the tracing filter directive
pub const LOG_FILTER_VAR: &str = "WORDSCOPE_LOG";
