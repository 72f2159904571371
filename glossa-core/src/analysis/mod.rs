//! Analyzed-sentence data model
//!
//! Types shared by the tagger, disambiguator and pattern matching
//! engine: morphological readings, per-token reading sets and the
//! analyzed sentence that owns them.

mod sentence;
mod token;

pub use sentence::AnalyzedSentence;
pub use token::{InputToken, Reading, TokenReadings};

/// Tag attached to the synthetic token that opens every sentence.
pub const SENTENCE_START_TAG: &str = "SENT_START";

/// Tag appended to the readings of the last real token of a sentence.
pub const SENTENCE_END_TAG: &str = "SENT_END";
