//! Pattern rules, anti-patterns and rule matches

use super::element::PatternElement;
use crate::error::{CoreError, Result};

/// Case conversion applied to a suggestion reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseConversion {
    /// Keep the matched text as is.
    #[default]
    Keep,
    /// Uppercase the first character.
    StartUpper,
    /// Lowercase the first character.
    StartLower,
    /// Uppercase everything.
    AllUpper,
    /// Lowercase everything.
    AllLower,
}

impl CaseConversion {
    pub(crate) fn apply(self, text: &str) -> String {
        match self {
            CaseConversion::Keep => text.to_owned(),
            CaseConversion::AllUpper => text.to_uppercase(),
            CaseConversion::AllLower => text.to_lowercase(),
            CaseConversion::StartUpper => convert_first(text, char::to_uppercase),
            CaseConversion::StartLower => convert_first(text, char::to_lowercase),
        }
    }
}

fn convert_first<I>(text: &str, convert: impl Fn(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => convert(first).chain(chars).collect(),
        None => String::new(),
    }
}

/// One piece of a suggestion template.
#[derive(Debug, Clone)]
pub enum SuggestionPart {
    /// Literal replacement text.
    Text(String),
    /// The matched text of the element at this index.
    MatchedText {
        /// Zero-based element index into the rule's pattern
        element: usize,
        /// Case conversion to apply
        case: CaseConversion,
    },
    /// The lemma of the first token matched by the element at this
    /// index, falling back to its surface form.
    MatchedLemma {
        /// Zero-based element index into the rule's pattern
        element: usize,
        /// Case conversion to apply
        case: CaseConversion,
    },
}

/// An ordered suggestion template; parts are concatenated on resolution.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub(crate) parts: Vec<SuggestionPart>,
}

impl Suggestion {
    /// Build a suggestion template from parts.
    pub fn new(parts: Vec<SuggestionPart>) -> Self {
        Self { parts }
    }

    /// A fixed replacement string.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            parts: vec![SuggestionPart::Text(text.into())],
        }
    }

    fn max_reference(&self) -> Option<usize> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                SuggestionPart::Text(_) => None,
                SuggestionPart::MatchedText { element, .. }
                | SuggestionPart::MatchedLemma { element, .. } => Some(*element),
            })
            .max()
    }
}

/// A pattern that vetoes a rule match when it aligns at
/// `match start + offset`.
#[derive(Debug, Clone)]
pub struct AntiPattern {
    pub(crate) elements: Vec<PatternElement>,
    pub(crate) offset: isize,
}

impl AntiPattern {
    /// Anti-pattern anchored at the match start.
    pub fn new(elements: Vec<PatternElement>) -> Self {
        Self {
            elements,
            offset: 0,
        }
    }

    /// Anti-pattern anchored relative to the match start (negative
    /// offsets inspect preceding context).
    pub fn with_offset(elements: Vec<PatternElement>, offset: isize) -> Self {
        Self { elements, offset }
    }
}

/// A style/grammar rule: an ordered element sequence plus messages,
/// suggestion templates and anti-patterns.
///
/// Immutable once built; shared across sentences and threads.
#[derive(Debug, Clone)]
pub struct PatternRule {
    id: String,
    elements: Vec<PatternElement>,
    antipatterns: Vec<AntiPattern>,
    message: String,
    short_message: String,
    suggestions: Vec<Suggestion>,
}

impl PatternRule {
    /// Create a rule, validating its element sequence.
    pub fn new(id: impl Into<String>, elements: Vec<PatternElement>) -> Result<Self> {
        let id = id.into();
        if elements.is_empty() {
            return Err(CoreError::EmptyPattern { rule_id: id });
        }
        for element in &elements {
            if element.min() > element.max() {
                return Err(CoreError::InvalidRepetition {
                    min: element.min(),
                    max: element.max(),
                });
            }
        }
        Ok(Self {
            id,
            elements,
            antipatterns: Vec::new(),
            message: String::new(),
            short_message: String::new(),
            suggestions: Vec::new(),
        })
    }

    /// Set the issue message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the short message for UI summaries.
    pub fn with_short_message(mut self, short: impl Into<String>) -> Self {
        self.short_message = short.into();
        self
    }

    /// Add a suggestion template; element references are validated
    /// against the pattern length.
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Result<Self> {
        if let Some(index) = suggestion.max_reference() {
            if index >= self.elements.len() {
                return Err(CoreError::InvalidSuggestionReference {
                    index,
                    element_count: self.elements.len(),
                });
            }
        }
        self.suggestions.push(suggestion);
        Ok(self)
    }

    /// Add an anti-pattern.
    pub fn with_antipattern(mut self, antipattern: AntiPattern) -> Self {
        self.antipatterns.push(antipattern);
        self
    }

    /// Rule identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pattern elements in order.
    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    /// Configured anti-patterns.
    pub fn antipatterns(&self) -> &[AntiPattern] {
        &self.antipatterns
    }

    /// Issue message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short message.
    pub fn short_message(&self) -> &str {
        &self.short_message
    }

    /// Suggestion templates.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }
}

/// One reported issue: a rule violation with its sentence span and
/// resolved replacement suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleMatch {
    /// Identifier of the rule that fired.
    pub rule_id: String,
    /// Byte offset of the match start in the sentence text.
    pub start: usize,
    /// Byte offset just past the match end.
    pub end: usize,
    /// Human-readable issue message.
    pub message: String,
    /// Short message for UI summaries.
    pub short_message: String,
    /// Resolved replacement suggestions, possibly empty.
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_is_rejected() {
        let err = PatternRule::new("EMPTY", vec![]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyPattern { .. }));
    }

    #[test]
    fn inverted_repetition_is_rejected() {
        let elements = vec![PatternElement::any().repeat(3, 1)];
        let err = PatternRule::new("BAD_REPS", elements).unwrap_err();
        assert_eq!(err, CoreError::InvalidRepetition { min: 3, max: 1 });
    }

    #[test]
    fn out_of_range_suggestion_reference_is_rejected() {
        let rule = PatternRule::new("REF", vec![PatternElement::any()]).unwrap();
        let err = rule
            .with_suggestion(Suggestion::new(vec![SuggestionPart::MatchedText {
                element: 1,
                case: CaseConversion::Keep,
            }]))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidSuggestionReference {
                index: 1,
                element_count: 1
            }
        );
    }

    #[test]
    fn case_conversions() {
        assert_eq!(CaseConversion::StartUpper.apply("their"), "Their");
        assert_eq!(CaseConversion::StartLower.apply("Their"), "their");
        assert_eq!(CaseConversion::AllUpper.apply("nasa"), "NASA");
        assert_eq!(CaseConversion::AllLower.apply("NASA"), "nasa");
        assert_eq!(CaseConversion::Keep.apply("AsIs"), "AsIs");
        assert_eq!(CaseConversion::StartUpper.apply(""), "");
    }
}
