//! Rule-driven linguistic analysis core
//!
//! This crate implements the three subsystems of a deterministic
//! style/grammar checker:
//!
//! - **Dictionary store**: a prefix-compressed trie mapping word forms
//!   to candidate (lemma, tag) readings.
//! - **Tagging and disambiguation**: surface forms become ambiguous
//!   reading sets, then ordered contextual rules narrow them.
//! - **Pattern matching**: sequences of token-level constraints with
//!   quantifiers, skip windows and anti-patterns are aligned against
//!   the disambiguated sentence to produce issue reports.
//!
//! Everything here is synchronous and CPU-bound. Dictionaries and rules
//! are immutable after construction and safe for unsynchronized
//! concurrent reads; per-sentence state is exclusively owned by one
//! invocation.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use glossa_core::analysis::InputToken;
//! use glossa_core::dictionary::DictionaryBuilder;
//! use glossa_core::pattern::{PatternElement, PatternMatcher, PatternRule};
//! use glossa_core::tagger::Tagger;
//!
//! let mut builder = DictionaryBuilder::new();
//! builder.insert("the", "the", "DT").insert("cat", "cat", "NN");
//! let tagger = Tagger::new(Arc::new(builder.build()));
//!
//! let sentence = tagger.tag(
//!     "the the cat",
//!     &[
//!         InputToken::new("the", 0, false),
//!         InputToken::new("the", 4, true),
//!         InputToken::new("cat", 8, true),
//!     ],
//! );
//!
//! let rule = PatternRule::new(
//!     "DOUBLED_THE",
//!     vec![PatternElement::text_ci("the"), PatternElement::text_ci("the")],
//! )
//! .unwrap()
//! .with_message("Possible typo: repeated word");
//!
//! let matches = PatternMatcher::new().find_matches(&sentence, &rule).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(&sentence.text()[matches[0].start..matches[0].end], "the the");
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod dictionary;
pub mod disambiguation;
pub mod error;
pub mod pattern;
pub mod tagger;

pub use analysis::{AnalyzedSentence, InputToken, Reading, TokenReadings};
pub use dictionary::{Dictionary, DictionaryBuilder};
pub use disambiguation::{
    DisambiguationAction, DisambiguationRule, Disambiguator, ReadingSpec,
};
pub use error::{CoreError, Result};
pub use pattern::{
    AntiPattern, CaseConversion, MatchedSpan, PatternElement, PatternMatcher, PatternRule,
    RuleMatch, Suggestion, SuggestionPart,
};
pub use tagger::Tagger;
