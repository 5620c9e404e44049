//! cli module
//!
//! Menu parsing, text loading, rendering and the interactive loop.

pub mod choice;
pub mod loader;
pub mod render;
pub mod session;

/// Re-exports
pub use choice::MenuChoice;
pub use session::Session;
