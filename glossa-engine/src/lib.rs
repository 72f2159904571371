//! Rule-set coordination and sentence pipeline for glossa
//!
//! This crate drives the `glossa-core` components: it owns the shared
//! dictionary and rule lists, applies whole-sentence checks alongside
//! pattern rules, and fans out over independent sentences.

#![warn(missing_docs)]

pub mod checker;
pub mod checks;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export key types
pub use checker::Checker;
pub use checks::{LongSentenceCheck, SentenceCheck};
pub use config::{CheckerConfig, CheckerConfigBuilder, DEFAULT_MAX_SENTENCE_WORDS};
pub use error::{EngineError, Result};
pub use pipeline::{Pipeline, SentenceInput};

// Re-export from core for convenience
pub use glossa_core::{
    AnalyzedSentence, Dictionary, DictionaryBuilder, DisambiguationRule, InputToken,
    PatternElement, PatternRule, RuleMatch, Tagger,
};
