//! wordscope-cli crate
//!
//! Interactive front end for the wordscope text model.
//!
//! ## Usage Example
//! ```bash
//! WORDSCOPE_CONFIG=analyzer.json WORDSCOPE_LOG=debug wordscope
//! ```
//!
//! Pick `1` to load text, then any analysis from the menu; `0` exits.

pub mod cli;
pub mod config;
pub mod errors;

pub use cli::{MenuChoice, Session};
pub use config::Config;
pub use errors::{CliError, CliErrorKind};
