//! models module
pub mod model_definition;

/// Re-exports
pub use model_definition::{
  CharStats, Prediction, ReplaceReport, SearchHit, Sentiment, SentimentReport, SpellCheck,
  WordCloudEntry, WordCount, WordStats,
};
