//! analysis module
//!
//! Index structures and scoring helpers used by [`TextModel`](crate::TextModel).

pub mod bigram;
pub mod frequency;
pub mod sentiment;
pub mod spelling;

/// Re-export major types
pub use bigram::BigramTable;
pub use frequency::{CharFrequency, FrequencyTable, WordFrequency};
pub use sentiment::SentimentLexicon;
pub use spelling::edits1;
