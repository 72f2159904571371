//! Checker configuration

use crate::error::{EngineError, Result};

/// Default maximum number of non-punctuation words per sentence.
pub const DEFAULT_MAX_SENTENCE_WORDS: usize = 40;

/// Configuration for a [`Checker`](crate::Checker) instance.
///
/// Thresholds are explicit per instance; there is no process-wide
/// default that the first caller wins.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Maximum non-punctuation words before the long-sentence check
    /// fires. Must be greater than zero.
    pub max_sentence_words: usize,
    /// Optional step budget per rule scan; `None` means unbounded.
    /// Rules exceeding it report zero matches for the sentence.
    pub match_budget: Option<usize>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_sentence_words: DEFAULT_MAX_SENTENCE_WORDS,
            match_budget: None,
        }
    }
}

impl CheckerConfig {
    /// Create a builder.
    pub fn builder() -> CheckerConfigBuilder {
        CheckerConfigBuilder::default()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_sentence_words == 0 {
            return Err(EngineError::Config(
                "max_sentence_words must be > 0".to_string(),
            ));
        }
        if self.match_budget == Some(0) {
            return Err(EngineError::Config(
                "match_budget must be > 0 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`CheckerConfig`].
#[derive(Debug, Default)]
pub struct CheckerConfigBuilder {
    max_sentence_words: Option<usize>,
    match_budget: Option<usize>,
}

impl CheckerConfigBuilder {
    /// Set the long-sentence word threshold.
    pub fn max_sentence_words(mut self, words: usize) -> Self {
        self.max_sentence_words = Some(words);
        self
    }

    /// Set the per-rule matching step budget.
    pub fn match_budget(mut self, budget: usize) -> Self {
        self.match_budget = Some(budget);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<CheckerConfig> {
        let config = CheckerConfig {
            max_sentence_words: self
                .max_sentence_words
                .unwrap_or(DEFAULT_MAX_SENTENCE_WORDS),
            match_budget: self.match_budget,
        };
        config.validate()?;
        Ok(config)
    }
}
