//! The analyzed sentence owned by one pipeline invocation

use super::token::TokenReadings;

/// Ordered token readings plus the original sentence text.
///
/// Index 0 is always the synthetic sentence-start token; token offsets
/// are monotonically non-decreasing byte offsets into `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzedSentence {
    text: String,
    tokens: Vec<TokenReadings>,
}

impl AnalyzedSentence {
    pub(crate) fn new(text: String, tokens: Vec<TokenReadings>) -> Self {
        debug_assert!(
            tokens.first().is_some_and(|t| t.is_sentence_start()),
            "analyzed sentence must begin with the sentence-start token"
        );
        debug_assert!(
            tokens.windows(2).all(|w| w[0].start() <= w[1].start()),
            "token offsets must be monotonically non-decreasing"
        );
        Self { text, tokens }
    }

    /// Original sentence text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tokens, the synthetic sentence-start token included.
    pub fn tokens(&self) -> &[TokenReadings] {
        &self.tokens
    }

    /// Mutable token access for the disambiguator.
    pub(crate) fn tokens_mut(&mut self) -> &mut [TokenReadings] {
        &mut self.tokens
    }

    /// Number of tokens, the synthetic start token included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A sentence always contains at least the start token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
