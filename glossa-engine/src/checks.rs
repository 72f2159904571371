//! Whole-sentence checks
//!
//! Simple predicates that bypass the pattern matching engine and scan
//! the token sequence once, reporting at most one match spanning the
//! whole sentence.

use glossa_core::{AnalyzedSentence, RuleMatch};
use regex::Regex;

use crate::error::{EngineError, Result};

/// Characters counting as punctuation rather than words.
const NON_WORD_PATTERN: &str =
    r#"^[.?!…:;,~’'"„“”»«‚‘›‹()\[\]\-–—*×∗·+÷:/=]$"#;

/// A check evaluated once per sentence, outside the pattern engine.
pub trait SentenceCheck: Send + Sync {
    /// Identifier reported in matches.
    fn id(&self) -> &str;

    /// Evaluate the sentence; at most one match.
    fn check(&self, sentence: &AnalyzedSentence) -> Option<RuleMatch>;
}

/// Warns on sentences with more than a configured number of words.
///
/// Punctuation tokens, the synthetic sentence-start token and the
/// sentence-final token are not counted. A firing check spans offset 0
/// to the sentence's last character index.
#[derive(Debug)]
pub struct LongSentenceCheck {
    max_words: usize,
    non_word: Regex,
}

impl LongSentenceCheck {
    /// Create a check with the given word threshold (must be > 0).
    pub fn new(max_words: usize) -> Result<Self> {
        if max_words == 0 {
            return Err(EngineError::Config(format!(
                "max_words must be > 0: {max_words}"
            )));
        }
        let non_word = Regex::new(NON_WORD_PATTERN)
            .map_err(|e| EngineError::Config(format!("non-word pattern: {e}")))?;
        Ok(Self {
            max_words,
            non_word,
        })
    }

    fn word_count(&self, sentence: &AnalyzedSentence) -> usize {
        sentence
            .tokens()
            .iter()
            .filter(|t| {
                !t.is_sentence_start()
                    && !t.is_sentence_end()
                    && !self.non_word.is_match(t.form())
            })
            .count()
    }
}

impl SentenceCheck for LongSentenceCheck {
    fn id(&self) -> &str {
        "TOO_LONG_SENTENCE"
    }

    fn check(&self, sentence: &AnalyzedSentence) -> Option<RuleMatch> {
        // Short-circuit: cannot exceed the threshold with fewer tokens
        if sentence.len() < self.max_words + 1 {
            return None;
        }
        if self.word_count(sentence) <= self.max_words {
            return None;
        }
        Some(RuleMatch {
            rule_id: self.id().to_owned(),
            start: 0,
            end: sentence.text().len().saturating_sub(1),
            message: format!(
                "Sentence is longer than {} words: consider splitting it",
                self.max_words
            ),
            short_message: "Long sentence".to_owned(),
            suggestions: Vec::new(),
        })
    }
}
