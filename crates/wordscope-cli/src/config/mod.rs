//! Config module

mod constants;
mod env;

pub use constants::{CONFIG_PATH_VAR, DEFAULT_LOG_FILTER, END_TEXT_SENTINEL, LOG_FILTER_VAR};
pub use env::Config;
