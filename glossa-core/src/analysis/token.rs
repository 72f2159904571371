//! Tokens and their morphological readings

use smallvec::SmallVec;

/// One candidate (lemma, tag) interpretation of a token.
///
/// Both fields are absent for the unknown-word sentinel produced by the
/// tagger when neither the literal nor the lowercased form has a
/// dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    lemma: Option<String>,
    tag: Option<String>,
}

impl Reading {
    /// Create a reading with a known lemma and tag.
    pub fn new(lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lemma: Some(lemma.into()),
            tag: Some(tag.into()),
        }
    }

    /// Create a tag-only reading (used for sentence markers).
    pub fn tag_only(tag: impl Into<String>) -> Self {
        Self {
            lemma: None,
            tag: Some(tag.into()),
        }
    }

    /// The unknown-word sentinel: no lemma, no tag.
    pub fn sentinel() -> Self {
        Self {
            lemma: None,
            tag: None,
        }
    }

    /// Lemma of this reading, if known.
    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    /// Part-of-speech tag of this reading, if known.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether this is the unknown-word sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.lemma.is_none() && self.tag.is_none()
    }
}

/// A raw token handed to the tagger by the external tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputToken {
    /// Literal text of the token, original casing preserved.
    pub form: String,
    /// Byte offset of the token in the sentence text.
    pub start: usize,
    /// Whether whitespace precedes this token.
    pub space_before: bool,
}

impl InputToken {
    /// Convenience constructor.
    pub fn new(form: impl Into<String>, start: usize, space_before: bool) -> Self {
        Self {
            form: form.into(),
            start,
            space_before,
        }
    }
}

/// One input token together with its ordered set of readings.
///
/// Invariants: the reading set is never empty (the sentinel stands in
/// for unknown words) and never contains the same (lemma, tag) pair
/// twice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenReadings {
    form: String,
    readings: SmallVec<[Reading; 4]>,
    start: usize,
    sentence_start: bool,
    sentence_end: bool,
    space_before: bool,
}

impl TokenReadings {
    /// Create a token with the given readings. An empty reading list is
    /// replaced by the sentinel.
    pub fn new(
        form: impl Into<String>,
        readings: impl IntoIterator<Item = Reading>,
        start: usize,
        space_before: bool,
    ) -> Self {
        let mut token = Self {
            form: form.into(),
            readings: SmallVec::new(),
            start,
            sentence_start: false,
            sentence_end: false,
            space_before,
        };
        for reading in readings {
            token.push_reading(reading);
        }
        if token.readings.is_empty() {
            token.readings.push(Reading::sentinel());
        }
        token
    }

    /// The synthetic token that opens every analyzed sentence.
    pub(crate) fn sentence_start(offset: usize) -> Self {
        let mut token = Self::new(
            "",
            [Reading::tag_only(super::SENTENCE_START_TAG)],
            offset,
            false,
        );
        token.sentence_start = true;
        token
    }

    /// Literal token text.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Candidate readings, in order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Byte offset of the token in the sentence text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.start + self.form.len()
    }

    /// Whether this is the synthetic sentence-start token.
    pub fn is_sentence_start(&self) -> bool {
        self.sentence_start
    }

    /// Whether this is the last real token of the sentence.
    pub fn is_sentence_end(&self) -> bool {
        self.sentence_end
    }

    pub(crate) fn mark_sentence_end(&mut self) {
        self.sentence_end = true;
        self.push_reading(Reading::tag_only(super::SENTENCE_END_TAG));
    }

    /// Whether whitespace precedes this token.
    pub fn has_space_before(&self) -> bool {
        self.space_before
    }

    /// Whether the token carries only the unknown-word sentinel.
    pub fn is_unknown(&self) -> bool {
        self.readings.len() == 1 && self.readings[0].is_sentinel()
    }

    /// Append a reading unless an identical one is already present.
    pub fn push_reading(&mut self, reading: Reading) {
        if !self.readings.contains(&reading) {
            self.readings.push(reading);
        }
    }

    /// Keep only readings satisfying `keep`. Refuses to empty the set:
    /// if no reading survives, the prior readings are kept unchanged
    /// and `false` is returned.
    pub fn retain_readings<F>(&mut self, keep: F) -> bool
    where
        F: Fn(&Reading) -> bool,
    {
        if !self.readings.iter().any(|r| keep(r)) {
            return false;
        }
        self.readings.retain(|r| keep(r));
        true
    }

    /// Replace the reading set. An empty replacement is rejected and
    /// the prior readings are kept.
    pub fn replace_readings(&mut self, readings: impl IntoIterator<Item = Reading>) -> bool {
        let mut replacement: SmallVec<[Reading; 4]> = SmallVec::new();
        for reading in readings {
            if !replacement.contains(&reading) {
                replacement.push(reading);
            }
        }
        if replacement.is_empty() {
            return false;
        }
        self.readings = replacement;
        true
    }

    /// First known lemma, falling back to the literal form.
    pub fn lemma_or_form(&self) -> &str {
        self.readings
            .iter()
            .find_map(|r| r.lemma())
            .unwrap_or(&self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_readings_become_sentinel() {
        let token = TokenReadings::new("blorf", [], 0, false);
        assert!(token.is_unknown());
        assert_eq!(token.readings().len(), 1);
        assert!(token.readings()[0].is_sentinel());
    }

    #[test]
    fn push_reading_deduplicates() {
        let mut token = TokenReadings::new("walk", [Reading::new("walk", "VB")], 0, false);
        token.push_reading(Reading::new("walk", "VB"));
        token.push_reading(Reading::new("walk", "NN"));
        assert_eq!(token.readings().len(), 2);
    }

    #[test]
    fn retain_refuses_to_empty() {
        let mut token = TokenReadings::new("walk", [Reading::new("walk", "VB")], 0, false);
        assert!(!token.retain_readings(|r| r.tag() == Some("NN")));
        assert_eq!(token.readings().len(), 1);
        assert_eq!(token.readings()[0].tag(), Some("VB"));
    }

    #[test]
    fn retain_keeps_matching_subset() {
        let mut token = TokenReadings::new(
            "walk",
            [Reading::new("walk", "VB"), Reading::new("walk", "NN")],
            0,
            false,
        );
        assert!(token.retain_readings(|r| r.tag() == Some("NN")));
        assert_eq!(token.readings().len(), 1);
        assert_eq!(token.readings()[0].tag(), Some("NN"));
    }

    #[test]
    fn token_span() {
        let token = TokenReadings::new("cat", [Reading::new("cat", "NN")], 4, true);
        assert_eq!(token.start(), 4);
        assert_eq!(token.end(), 7);
        assert!(token.has_space_before());
    }
}
