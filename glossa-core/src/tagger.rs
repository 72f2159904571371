//! Dictionary-based morphological tagging
//!
//! Turns a tokenized sentence into an [`AnalyzedSentence`]: each token
//! gets the union of the dictionary readings for its literal and, when
//! it differs, its lowercased form. A token absent from the dictionary
//! either way carries the single unknown-word sentinel reading.

use std::sync::Arc;

use crate::analysis::{AnalyzedSentence, InputToken, TokenReadings};
use crate::dictionary::Dictionary;

/// Stateless tagger over a shared dictionary.
///
/// Pure function of its inputs; safe to use concurrently across
/// independent sentences.
#[derive(Debug, Clone)]
pub struct Tagger {
    dictionary: Arc<Dictionary>,
}

impl Tagger {
    /// Create a tagger over the given dictionary.
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// The dictionary this tagger reads from.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Tag a tokenized sentence.
    ///
    /// `text` is the original sentence the token offsets refer to. The
    /// result starts with the synthetic sentence-start token, and the
    /// last real token is marked as the sentence end.
    pub fn tag(&self, text: &str, tokens: &[InputToken]) -> AnalyzedSentence {
        let mut analyzed = Vec::with_capacity(tokens.len() + 1);
        analyzed.push(TokenReadings::sentence_start(
            tokens.first().map_or(0, |t| t.start),
        ));

        for token in tokens {
            let mut readings = self.dictionary.lookup(&token.form);
            let lower = token.form.to_lowercase();
            if lower != token.form {
                for reading in self.dictionary.lookup(&lower) {
                    if !readings.contains(&reading) {
                        readings.push(reading);
                    }
                }
            }
            analyzed.push(TokenReadings::new(
                token.form.clone(),
                readings,
                token.start,
                token.space_before,
            ));
        }

        if let Some(last) = analyzed.last_mut() {
            if !last.is_sentence_start() {
                last.mark_sentence_end();
            }
        }

        AnalyzedSentence::new(text.to_owned(), analyzed)
    }
}
